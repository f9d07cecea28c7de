//! Ordered line registry.
//!
//! Lines live in parallel vectors indexed identically: the handle, the line
//! itself, its visibility and its clear balance (rows drawn but not yet
//! cleared). Callers refer to lines through the [`LineId`] returned by
//! [`LineRegistry::add`].

use crate::line::Line;

/// Stable handle of a registered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u64);

/// Mutable view of one registry slot.
pub(crate) struct SlotMut<'a> {
    pub line: &'a mut Line,
    pub hidden: bool,
    pub clear_balance: &'a mut u32,
}

#[derive(Debug, Default)]
pub struct LineRegistry {
    next_id: u64,
    ids: Vec<LineId>,
    lines: Vec<Line>,
    hidden: Vec<bool>,
    clear_balance: Vec<u32>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: Line) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;

        self.ids.push(id);
        self.lines.push(line);
        self.hidden.push(false);
        self.clear_balance.push(0);
        id
    }

    /// Remove a line, keeping the order of the rest.
    ///
    /// A registry holding at most one line is emptied outright, whichever
    /// handle is passed.
    pub fn remove(&mut self, id: LineId) {
        if self.lines.len() <= 1 {
            self.ids.clear();
            self.lines.clear();
            self.hidden.clear();
            self.clear_balance.clear();
            return;
        }

        let Some(i) = self.position(id) else {
            return;
        };

        self.ids.remove(i);
        self.lines.remove(i);
        self.hidden.remove(i);
        self.clear_balance.remove(i);
    }

    pub fn hide(&mut self, id: LineId) {
        if let Some(i) = self.position(id) {
            self.hidden[i] = true;
        }
    }

    pub fn show(&mut self, id: LineId) {
        if self.lines.is_empty() {
            return;
        }
        if let Some(i) = self.position(id) {
            self.hidden[i] = false;
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.position(id).is_some()
    }

    pub fn is_hidden(&self, id: LineId) -> Option<bool> {
        self.position(id).map(|i| self.hidden[i])
    }

    pub fn clear_balance(&self, id: LineId) -> Option<u32> {
        self.position(id).map(|i| self.clear_balance[i])
    }

    /// Handles in draw order.
    pub fn ids(&self) -> &[LineId] {
        &self.ids
    }

    pub(crate) fn clear_balances(&self) -> &[u32] {
        &self.clear_balance
    }

    /// Slots in draw order; reverse the iterator for the clear pass.
    pub(crate) fn slots_mut(&mut self) -> impl DoubleEndedIterator<Item = SlotMut<'_>> {
        self.lines
            .iter_mut()
            .zip(self.hidden.iter())
            .zip(self.clear_balance.iter_mut())
            .map(|((line, hidden), clear_balance)| SlotMut {
                line,
                hidden: *hidden,
                clear_balance,
            })
    }

    fn position(&self, id: LineId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let n = self.ids.len();
        self.lines.len() == n && self.hidden.len() == n && self.clear_balance.len() == n
    }
}
