use super::{Destination, Severity};
use serde::{Deserialize, Serialize};

/// Seconds a viewport message stays on screen when the caller does not say otherwise.
pub const DEFAULT_DISPLAY_TIME: f32 = 5.0;

/// Presentation options for a single logging call.
///
/// `prefix` and `suffix` are concatenated around the formatted value verbatim; no
/// separator is inserted. `display_time` only affects the viewport sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub severity: Severity,
    pub destination: Destination,
    pub prefix: String,
    pub suffix: String,
    pub display_time: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            destination: Destination::Console,
            prefix: String::new(),
            suffix: String::new(),
            display_time: DEFAULT_DISPLAY_TIME,
        }
    }
}

impl DisplayOptions {
    pub fn new(severity: Severity, destination: Destination) -> Self {
        Self {
            severity,
            destination,
            ..Self::default()
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn display_time(mut self, seconds: f32) -> Self {
        self.display_time = seconds;
        self
    }
}
