use super::FatalHook;
use crate::domain::Message;
use std::io::Write;

/// Aborts the process, the way an unrecoverable engine assertion would.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbortProcess;

impl FatalHook for AbortProcess {
    fn terminate(&self, message: &Message) {
        let _ = writeln!(std::io::stderr(), "Fatal: {}", message.text);
        std::process::abort();
    }
}

/// Exits the process with a status code instead of aborting.
#[derive(Debug, Clone, Copy)]
pub struct ExitProcess(pub i32);

impl Default for ExitProcess {
    fn default() -> Self {
        Self(1)
    }
}

impl FatalHook for ExitProcess {
    fn terminate(&self, _message: &Message) {
        std::process::exit(self.0);
    }
}
