use super::color::LinearColor;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a debug message.
///
/// Selects the overlay color and the console level. `Fatal` additionally terminates the
/// process once the message has reached every enabled sink.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Overlay color used by the viewport sink.
    pub fn color(self) -> LinearColor {
        match self {
            Severity::Info => LinearColor::CYAN,
            Severity::Success => LinearColor::GREEN,
            Severity::Warning => LinearColor::YELLOW,
            Severity::Error => LinearColor::RED,
            Severity::Fatal => LinearColor::DARK_RED,
        }
    }

    /// Console level. Success has no level of its own and logs as INFO.
    pub fn level(self) -> tracing::Level {
        match self {
            Severity::Info | Severity::Success => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
            Severity::Error | Severity::Fatal => tracing::Level::ERROR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Success => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Fatal => "Fatal",
        }
    }

    pub fn is_fatal(self) -> bool {
        matches!(self, Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
