#![warn(rust_2018_idioms)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_possible_truncation, // Display durations are small, positive seconds
    clippy::cast_precision_loss,      // Acceptable for display
    clippy::missing_errors_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. ConsoleSink in sink module
    clippy::must_use_candidate,       // Annotated selectively on formatting APIs
    clippy::doc_markdown
)]

pub mod app;
pub mod domain;
pub mod format;
pub mod location;
pub mod math;
pub mod router;
pub mod sink;
pub mod test_support;

// Re-export main types for easy access
pub use app::Config;
pub use glam;
pub use domain::{Destination, DisplayOptions, LinearColor, Message, Severity};
pub use format::{Describe, Name, Number, Validity};
pub use location::CallSite;
pub use math::{Matrix, Quat, Rotator, Transform, Vector};
pub use router::{Log, LogBuilder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
