//! Output seams.
//!
//! The router only talks to these three traits. Hosts plug in their own overlay renderer
//! and log stream; the defaults here are an in-memory [`MessageBoard`], a `tracing`
//! backed [`TracingConsole`] and [`AbortProcess`] for Fatal.

pub mod board;
pub mod console;
pub mod fatal;

pub use board::{BoardEntry, DEFAULT_BOARD_CAPACITY, MessageBoard};
pub use console::{CONSOLE_TARGET, TracingConsole};
pub use fatal::{AbortProcess, ExitProcess};

use crate::domain::Message;

/// Transient on-screen overlay. Owns expiry and stacking.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportSink: Send + Sync {
    fn show(&self, message: &Message);
}

/// Persistent, process-wide log stream.
#[cfg_attr(test, mockall::automock)]
pub trait ConsoleSink: Send + Sync {
    fn write(&self, message: &Message);

    /// Called before a Fatal message terminates the process.
    fn flush(&self) {}
}

/// Invoked once a Fatal message has reached every enabled sink.
#[cfg_attr(test, mockall::automock)]
pub trait FatalHook: Send + Sync {
    fn terminate(&self, message: &Message);
}

/// Overlay that drops everything, for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullViewport;

impl ViewportSink for NullViewport {
    fn show(&self, _message: &Message) {}
}
