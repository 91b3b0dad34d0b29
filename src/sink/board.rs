use super::ViewportSink;
use crate::domain::{LinearColor, Message, Severity};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Instant;

pub const DEFAULT_BOARD_CAPACITY: usize = 64;

/// One overlay line.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardEntry {
    pub text: String,
    pub severity: Severity,
    pub color: LinearColor,
    pub posted_at: Instant,
    /// `None` when the display time runs past what `Instant` can represent
    pub expires_at: Option<Instant>,
}

impl BoardEntry {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// In-memory viewport overlay.
///
/// Messages stack newest-first and disappear after their display time. When full, the
/// oldest entry is dropped. A renderer polls [`MessageBoard::visible`] once per frame.
#[derive(Debug)]
pub struct MessageBoard {
    entries: Mutex<VecDeque<BoardEntry>>,
    capacity: usize,
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_CAPACITY)
    }
}

impl MessageBoard {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn post_at(&self, message: &Message, now: Instant) {
        let entry = BoardEntry {
            text: message.text.clone(),
            severity: message.severity,
            color: message.color(),
            posted_at: now,
            expires_at: now.checked_add(message.display_duration()),
        };

        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_back();
        }
        entries.push_front(entry);
    }

    /// Unexpired entries at `now`, newest first.
    pub fn visible_at(&self, now: Instant) -> Vec<BoardEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.is_visible_at(now))
            .cloned()
            .collect()
    }

    pub fn visible(&self) -> Vec<BoardEntry> {
        self.visible_at(Instant::now())
    }

    /// Drop expired entries, returning how many were removed.
    pub fn prune(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|entry| entry.is_visible_at(now));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl ViewportSink for MessageBoard {
    fn show(&self, message: &Message) {
        self.post_at(message, Instant::now());
    }
}
