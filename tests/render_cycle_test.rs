use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hangman_tty::term::{Color, Line, LineId, LineRenderer};

const UP: &[u8] = b"\x1b[1A";

fn take(renderer: &LineRenderer<Vec<u8>>) -> Vec<u8> {
    renderer.with_sink(std::mem::take)
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}

struct Layout {
    renderer: LineRenderer<Vec<u8>>,
    error: LineId,
    error_on: Arc<AtomicBool>,
}

/// state / turn / game over (hidden) / error (hidden) / input
fn session_layout() -> Layout {
    let renderer = LineRenderer::new(Vec::new());
    let error_on = Arc::new(AtomicBool::new(false));

    renderer.add_line(Line::from_generator(|| Some(b"_ _ _ _ ".to_vec())));
    renderer.add_line(Line::animated(
        || Some(b"It's your turn".to_vec()),
        &[Color::Blue, Color::Green],
    ));
    let over = renderer.add_line(Line::from_generator(|| Some(b"Game is over".to_vec())));
    let error = {
        let error_on = Arc::clone(&error_on);
        renderer.add_line(Line::from_generator(move || {
            error_on
                .load(Ordering::SeqCst)
                .then(|| Color::Red.paint("invalid character"))
        }))
    };
    let input = renderer.create_input_line('>');
    renderer.add_line(input);

    renderer.hide_line(over);
    renderer.hide_line(error);

    Layout {
        renderer,
        error,
        error_on,
    }
}

#[test]
fn session_layout_is_stable_across_cycles() {
    let layout = session_layout();
    let r = &layout.renderer;

    for _ in 0..20 {
        r.draw().unwrap();
        let stats = r.stats();
        assert_eq!(stats.cursor, 2);
        assert_eq!(stats.clear_balances, vec![1, 1, 0, 0, 1]);
    }
}

#[test]
fn echoed_input_is_compensated_once() {
    let layout = session_layout();
    let r = &layout.renderer;
    r.draw().unwrap();
    r.draw().unwrap();
    take(r);

    r.had_input();
    r.draw().unwrap();
    let with_input = take(r);

    r.draw().unwrap();
    let without_input = take(r);

    assert_eq!(count(&with_input, UP), count(&without_input, UP) + 1);
    assert!(with_input.ends_with(b"\x1b[1B> \x1b[0K"));
    assert!(without_input.ends_with(b"\x1b[1B> \x1b[u"));
    assert_eq!(r.stats().cursor, 2);
    assert_eq!(r.stats().off_the_bottom, 0);
}

#[test]
fn error_row_comes_and_goes_without_drift() {
    let layout = session_layout();
    let r = &layout.renderer;
    r.draw().unwrap();

    layout.error_on.store(true, Ordering::SeqCst);
    r.show_line(layout.error);
    r.draw().unwrap();
    assert_eq!(r.stats().cursor, 3);
    assert!(take(r)
        .windows(b"invalid character".len())
        .any(|w| w == b"invalid character"));

    // Hidden again: the row drawn last cycle is still cleared once.
    layout.error_on.store(false, Ordering::SeqCst);
    r.hide_line(layout.error);
    r.draw().unwrap();
    assert_eq!(r.stats().cursor, 2);
    assert_eq!(r.clear_balance(layout.error), Some(0));

    r.draw().unwrap();
    assert_eq!(r.stats().cursor, 2);
}

#[test]
fn removing_lines_keeps_the_rest_in_order() {
    let renderer = LineRenderer::new(Vec::new());
    let a = renderer.add_line(Line::from_generator(|| Some(b"A".to_vec())));
    let b = renderer.add_line(Line::from_generator(|| Some(b"B".to_vec())));
    renderer.add_line(Line::from_generator(|| Some(b"C".to_vec())));

    renderer.remove_line(b);
    renderer.draw().unwrap();
    assert_eq!(take(&renderer), b"\x1b[2KA\n\x1b[2KC\n");

    renderer.remove_line(a);
    assert_eq!(renderer.stats().lines, 1);

    // With a single line left, any removal empties the registry.
    renderer.remove_line(a);
    assert_eq!(renderer.stats().lines, 0);
    assert!(renderer.stats().clear_balances.is_empty());
}

#[test]
fn draw_from_many_threads_is_serialized() {
    let renderer = Arc::new(LineRenderer::new(Vec::new()));
    renderer.add_line(Line::from_generator(|| Some(b"X".to_vec())));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = Arc::clone(&renderer);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    if i % 2 == 0 {
                        renderer.draw().unwrap();
                    } else {
                        renderer.had_input();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    renderer.draw().unwrap();
    let stats = renderer.stats();
    assert_eq!(stats.cursor, 1);
    assert_eq!(stats.off_the_bottom, 0);
    assert_eq!(stats.clear_balances, vec![1]);
}
