use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a message is routed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Transient on-screen overlay only
    Viewport,
    /// Persistent console/log stream only
    #[default]
    Console,
    /// Viewport and console
    Both,
    /// Disabled; nothing is formatted or written
    #[value(alias = "disabled")]
    #[serde(alias = "disabled")]
    None,
}

impl Destination {
    pub fn is_enabled(self) -> bool {
        self != Destination::None
    }

    pub fn includes_viewport(self) -> bool {
        matches!(self, Destination::Viewport | Destination::Both)
    }

    pub fn includes_console(self) -> bool {
        matches!(self, Destination::Console | Destination::Both)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Destination::Viewport => "viewport",
            Destination::Console => "console",
            Destination::Both => "both",
            Destination::None => "none",
        }
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewport" => Ok(Destination::Viewport),
            "console" => Ok(Destination::Console),
            "both" => Ok(Destination::Both),
            "none" | "disabled" => Ok(Destination::None),
            _ => Err(format!(
                "unknown destination '{s}'. Valid values: viewport, console, both, none"
            )),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
