use super::ConsoleSink;
use crate::domain::{Message, Severity};
use std::io::Write;
use tracing::{error, info, warn};

/// Target attached to every console event.
pub const CONSOLE_TARGET: &str = "debug_log";

/// Console sink that emits `tracing` events.
///
/// Whatever subscriber the host installed decides timestamps, colors and output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl ConsoleSink for TracingConsole {
    fn write(&self, message: &Message) {
        let severity = message.severity;
        match severity {
            Severity::Info | Severity::Success => {
                info!(target: CONSOLE_TARGET, severity = %severity, "{}", message.text);
            }
            Severity::Warning => {
                warn!(target: CONSOLE_TARGET, severity = %severity, "{}", message.text);
            }
            Severity::Error | Severity::Fatal => {
                error!(target: CONSOLE_TARGET, severity = %severity, "{}", message.text);
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}
