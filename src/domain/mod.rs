//! Domain layer for debug-log.
//!
//! Contains the value types shared by the formatter, the router and the sinks:
//! - `Severity`: Info/Success/Warning/Error/Fatal, with overlay color and console level
//! - `Destination`: which sink(s) receive a message
//! - `DisplayOptions`: the per-call presentation bundle
//! - `Message`: the dispatch unit handed to sinks

pub mod color;
pub mod destination;
pub mod message;
pub mod options;
pub mod severity;

pub use color::LinearColor;
pub use destination::Destination;
pub use message::Message;
pub use options::{DEFAULT_DISPLAY_TIME, DisplayOptions};
pub use severity::Severity;
