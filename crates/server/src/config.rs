//! Server configuration.

use std::time::Duration;

use crate::core::{Hangman, SimpleRng};
use crate::types::{DEFAULT_HOST, DEFAULT_PORT, REDRAW_INTERVAL_MS};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Period of each session's render cycle.
    pub redraw_interval: Duration,
    /// Seed for word selection. Time-derived when unset.
    pub seed: Option<u32>,
    /// Play this word instead of drawing one from the pool.
    pub word: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            redraw_interval: Duration::from_millis(REDRAW_INTERVAL_MS),
            seed: None,
            word: None,
        }
    }
}

impl ServerConfig {
    /// Create from `HANGMAN_*` environment variables.
    ///
    /// - `HANGMAN_HOST`: bind address (default "0.0.0.0")
    /// - `HANGMAN_PORT`: port (default 9191)
    /// - `HANGMAN_REDRAW_MS`: render cycle period (default 200)
    /// - `HANGMAN_SEED`: word selection seed
    /// - `HANGMAN_WORD`: fixed word
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HANGMAN_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);

        let port = lookup("HANGMAN_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let redraw_interval = lookup("HANGMAN_REDRAW_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.redraw_interval);

        let seed = lookup("HANGMAN_SEED").and_then(|s| s.trim().parse().ok());

        let word = lookup("HANGMAN_WORD")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            redraw_interval,
            seed,
            word,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Start the game this configuration describes.
    pub fn new_game(&self) -> Hangman {
        if let Some(word) = self.word.as_deref() {
            return Hangman::new(word);
        }
        let seed = self
            .seed
            .unwrap_or_else(|| SimpleRng::from_time().next_u32());
        Hangman::with_seed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_config_from_env() {
        // This test just ensures it doesn't panic
        let _config = ServerConfig::from_env();
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9191);
        assert_eq!(config.redraw_interval, Duration::from_millis(200));
        assert_eq!(config.seed, None);
        assert_eq!(config.word, None);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HANGMAN_HOST", "127.0.0.1"),
            ("HANGMAN_PORT", "4000"),
            ("HANGMAN_REDRAW_MS", "50"),
            ("HANGMAN_SEED", "42"),
            ("HANGMAN_WORD", " ferrous "),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
        assert_eq!(config.redraw_interval, Duration::from_millis(50));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.new_game().word(), "ferrous");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HANGMAN_PORT", "not-a-port"),
            ("HANGMAN_REDRAW_MS", "0"),
            ("HANGMAN_WORD", "   "),
        ]));
        assert_eq!(config.port, 9191);
        assert_eq!(config.redraw_interval, Duration::from_millis(200));
        assert_eq!(config.word, None);
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = ServerConfig {
            seed: Some(7),
            ..ServerConfig::default()
        };
        assert_eq!(config.new_game().word(), config.new_game().word());
    }
}
