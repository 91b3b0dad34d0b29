//! Shared test support utilities
//!
//! Provides a `Recorder` implementing all three sink traits, so tests can assert on what
//! reached which sink, in order, without terminating the process on Fatal.

use crate::domain::Message;
use crate::router::Log;
use crate::sink::{ConsoleSink, FatalHook, ViewportSink};
use parking_lot::Mutex;
use std::sync::Arc;

/// One observed sink call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Viewport(Message),
    Console(Message),
    Flush,
    Terminate(Message),
}

/// Records every sink call instead of rendering, logging or exiting.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<SinkEvent>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A `Log` whose viewport, console and fatal hook all point at this recorder.
    pub fn log(self: &Arc<Self>) -> Log {
        Log::builder()
            .viewport(self.clone())
            .console(self.clone())
            .fatal_hook(self.clone())
            .build()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    pub fn viewport_texts(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Viewport(message) => Some(message.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn console_texts(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Console(message) => Some(message.text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Text of the most recent console write.
    pub fn last_console(&self) -> Option<String> {
        self.console_texts().pop()
    }

    pub fn terminations(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, SinkEvent::Terminate(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl ViewportSink for Recorder {
    fn show(&self, message: &Message) {
        self.events.lock().push(SinkEvent::Viewport(message.clone()));
    }
}

impl ConsoleSink for Recorder {
    fn write(&self, message: &Message) {
        self.events.lock().push(SinkEvent::Console(message.clone()));
    }

    fn flush(&self) {
        self.events.lock().push(SinkEvent::Flush);
    }
}

impl FatalHook for Recorder {
    fn terminate(&self, message: &Message) {
        self.events.lock().push(SinkEvent::Terminate(message.clone()));
    }
}
