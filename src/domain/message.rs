use super::{LinearColor, Severity};
use std::time::Duration;

/// A fully formatted message, ready for the sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    /// Seconds on screen; ignored by the console sink.
    pub display_time: f32,
}

impl Message {
    pub fn new(text: impl Into<String>, severity: Severity, display_time: f32) -> Self {
        Self {
            text: text.into(),
            severity,
            display_time,
        }
    }

    pub fn color(&self) -> LinearColor {
        self.severity.color()
    }

    /// Display time as a `Duration`. Negative or non-finite values collapse to zero.
    pub fn display_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.display_time).unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_duration() {
        let message = Message::new("hi", Severity::Info, 2.5);
        assert_eq!(message.display_duration(), Duration::from_millis(2500));

        let negative = Message::new("hi", Severity::Info, -1.0);
        assert_eq!(negative.display_duration(), Duration::ZERO);

        let nan = Message::new("hi", Severity::Info, f32::NAN);
        assert_eq!(nan.display_duration(), Duration::ZERO);
    }

    #[test]
    fn test_color_follows_severity() {
        let message = Message::new("oops", Severity::Error, 1.0);
        assert_eq!(message.color(), LinearColor::RED);
    }
}
