//! The message formatter/router.
//!
//! Every entry point renders its value lazily and hands one [`Message`] to the enabled
//! sinks. `Destination::None` returns before anything is formatted.

use crate::app::{Config, FatalAction};
use crate::domain::{Destination, DisplayOptions, LinearColor, Message, Severity};
use crate::format::describe::{Describe, ExpandedTransform, Percent, compose};
use crate::format::{Number, Validity, phrases};
use crate::math::{Matrix, Quat, Rotator, Transform, Vector};
use crate::sink::{
    AbortProcess, ConsoleSink, ExitProcess, FatalHook, MessageBoard, TracingConsole, ViewportSink,
};
use std::sync::Arc;
use tracing::debug;

/// Formats values and routes them to the viewport and console sinks.
///
/// Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct Log {
    viewport: Arc<dyn ViewportSink>,
    console: Arc<dyn ConsoleSink>,
    fatal: Arc<dyn FatalHook>,
    destination: Destination,
    display_time: f32,
}

impl Default for Log {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log")
            .field("destination", &self.destination)
            .field("display_time", &self.display_time)
            .finish_non_exhaustive()
    }
}

impl Log {
    pub fn builder() -> LogBuilder {
        LogBuilder::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self::builder().config(config.clone()).build()
    }

    /// Options carrying the configured destination and display time.
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions::default()
            .destination(self.destination)
            .display_time(self.display_time)
    }

    pub fn default_destination(&self) -> Destination {
        self.destination
    }

    /// Log any describable value with the given options.
    pub fn value<D: Describe + ?Sized>(&self, value: &D, options: &DisplayOptions) {
        self.dispatch(
            options.severity,
            options.destination,
            options.display_time,
            || compose(&options.prefix, value, &options.suffix),
        );
    }

    /// Log plain text with the given options.
    pub fn message(&self, options: &DisplayOptions, text: &str) {
        self.value(text, options);
    }

    /// Log a message (text or [`Name`](crate::format::Name)) at any severity.
    pub fn debug_message<D: Describe + ?Sized>(
        &self,
        severity: Severity,
        message: &D,
        destination: Destination,
        display_time: f32,
    ) {
        self.dispatch(severity, destination, display_time, || message.describe());
    }

    /// Log to the console, then terminate.
    pub fn fatal(&self, message: &str) {
        self.debug_message(
            Severity::Fatal,
            message,
            Destination::Console,
            self.display_time,
        );
    }

    pub fn error(&self, message: &str, destination: Destination, display_time: f32) {
        self.debug_message(Severity::Error, message, destination, display_time);
    }

    pub fn success(&self, message: &str, destination: Destination, display_time: f32) {
        self.debug_message(Severity::Success, message, destination, display_time);
    }

    pub fn warning(&self, message: &str, destination: Destination, display_time: f32) {
        self.debug_message(Severity::Warning, message, destination, display_time);
    }

    pub fn info(&self, message: &str, destination: Destination, display_time: f32) {
        self.debug_message(Severity::Info, message, destination, display_time);
    }

    pub fn hello(&self, destination: Destination) {
        self.phrase(Severity::Info, phrases::HELLO, "", "", destination);
    }

    pub fn yes(&self, prefix: &str, suffix: &str, destination: Destination) {
        self.phrase(Severity::Success, phrases::YES, prefix, suffix, destination);
    }

    pub fn no(&self, prefix: &str, suffix: &str, destination: Destination) {
        self.phrase(Severity::Error, phrases::NO, prefix, suffix, destination);
    }

    pub fn valid(&self, prefix: &str, suffix: &str, destination: Destination) {
        self.phrase(Severity::Success, phrases::VALID, prefix, suffix, destination);
    }

    pub fn invalid(&self, prefix: &str, suffix: &str, destination: Destination) {
        self.phrase(Severity::Error, phrases::INVALID, prefix, suffix, destination);
    }

    /// Log whether `object` still refers to something usable.
    pub fn object_validity<V: Validity + ?Sized>(&self, object: &V, destination: Destination) {
        if object.is_valid() {
            self.valid("", "", destination);
        } else {
            self.invalid("", "", destination);
        }
    }

    /// Any integer or float width.
    pub fn number(&self, number: impl Into<Number>, options: &DisplayOptions) {
        let number: Number = number.into();
        self.value(&number, options);
    }

    /// The number followed directly by `%`.
    pub fn percent(&self, number: f32, options: &DisplayOptions) {
        self.value(&Percent(number), options);
    }

    /// `True` or `False`.
    pub fn boolean(&self, value: bool, options: &DisplayOptions) {
        self.value(&value, options);
    }

    pub fn vector(&self, vector: &Vector, options: &DisplayOptions) {
        self.value(vector, options);
    }

    pub fn rotator(&self, rotator: &Rotator, options: &DisplayOptions) {
        self.value(rotator, options);
    }

    pub fn quat(&self, quat: &Quat, options: &DisplayOptions) {
        self.value(quat, options);
    }

    pub fn matrix(&self, matrix: &Matrix, options: &DisplayOptions) {
        self.value(matrix, options);
    }

    pub fn color(&self, color: &LinearColor, options: &DisplayOptions) {
        self.value(color, options);
    }

    /// Log a transform; `expanded` puts translation, rotation and scale on separate lines.
    pub fn transform(
        &self,
        transform: &Transform,
        prefix: &str,
        expanded: bool,
        destination: Destination,
        display_time: f32,
    ) {
        let options = DisplayOptions::new(Severity::Info, destination)
            .prefix(prefix)
            .display_time(display_time);
        if expanded {
            self.value(&ExpandedTransform(transform), &options);
        } else {
            self.value(transform, &options);
        }
    }

    fn phrase(
        &self,
        severity: Severity,
        phrase: &'static str,
        prefix: &str,
        suffix: &str,
        destination: Destination,
    ) {
        self.dispatch(severity, destination, self.display_time, || {
            compose(prefix, phrase, suffix)
        });
    }

    fn dispatch<F>(&self, severity: Severity, destination: Destination, display_time: f32, render: F)
    where
        F: FnOnce() -> String,
    {
        if !destination.is_enabled() {
            return;
        }

        let message = Message::new(render(), severity, display_time);

        if destination.includes_viewport() {
            self.viewport.show(&message);
        }
        if destination.includes_console() {
            self.console.write(&message);
        }

        if severity.is_fatal() {
            debug!("Fatal message dispatched to {destination}, terminating");
            self.console.flush();
            self.fatal.terminate(&message);
        }
    }
}

/// Assembles a [`Log`]. Unset collaborators fall back to the defaults named by the
/// config: a [`MessageBoard`] overlay, the [`TracingConsole`], and abort or exit on Fatal.
#[derive(Default)]
pub struct LogBuilder {
    viewport: Option<Arc<dyn ViewportSink>>,
    console: Option<Arc<dyn ConsoleSink>>,
    fatal: Option<Arc<dyn FatalHook>>,
    config: Config,
}

impl LogBuilder {
    pub fn viewport(mut self, sink: Arc<dyn ViewportSink>) -> Self {
        self.viewport = Some(sink);
        self
    }

    pub fn console(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.console = Some(sink);
        self
    }

    pub fn fatal_hook(mut self, hook: Arc<dyn FatalHook>) -> Self {
        self.fatal = Some(hook);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Log {
        let config = self.config;
        let viewport: Arc<dyn ViewportSink> = match self.viewport {
            Some(sink) => sink,
            None => Arc::new(MessageBoard::new(config.board_capacity)),
        };
        let console: Arc<dyn ConsoleSink> = match self.console {
            Some(sink) => sink,
            None => Arc::new(TracingConsole),
        };
        let fatal: Arc<dyn FatalHook> = match (self.fatal, config.on_fatal) {
            (Some(hook), _) => hook,
            (None, FatalAction::Abort) => Arc::new(AbortProcess),
            (None, FatalAction::Exit) => Arc::new(ExitProcess::default()),
        };

        Log {
            viewport,
            console,
            fatal,
            destination: config.destination,
            display_time: config.display_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MockConsoleSink, MockFatalHook, MockViewportSink};
    use mockall::Sequence;
    use mockall::predicate::function;

    fn log_with(
        viewport: MockViewportSink,
        console: MockConsoleSink,
        fatal: MockFatalHook,
    ) -> Log {
        Log::builder()
            .viewport(Arc::new(viewport))
            .console(Arc::new(console))
            .fatal_hook(Arc::new(fatal))
            .build()
    }

    #[test]
    fn test_none_touches_no_sink() {
        let mut viewport = MockViewportSink::new();
        viewport.expect_show().never();
        let mut console = MockConsoleSink::new();
        console.expect_write().never();
        console.expect_flush().never();
        let mut fatal = MockFatalHook::new();
        fatal.expect_terminate().never();

        let log = log_with(viewport, console, fatal);
        let none = DisplayOptions::default().destination(Destination::None);

        log.number(42, &none);
        log.boolean(true, &none);
        log.hello(Destination::None);
        log.object_validity(&None::<Arc<u8>>, Destination::None);
        log.debug_message(Severity::Fatal, "boom", Destination::None, 5.0);
    }

    #[test]
    fn test_none_never_renders() {
        struct Exploding;
        impl Describe for Exploding {
            fn describe_into(&self, _out: &mut String) {
                panic!("rendered a value routed to Destination::None");
            }
        }

        let log = log_with(
            MockViewportSink::new(),
            MockConsoleSink::new(),
            MockFatalHook::new(),
        );
        log.value(&Exploding, &DisplayOptions::default().destination(Destination::None));
    }

    #[test]
    fn test_viewport_only() {
        let mut viewport = MockViewportSink::new();
        viewport
            .expect_show()
            .with(function(|m: &Message| m.text == "Hello" && m.display_time == 5.0))
            .times(1)
            .return_const(());
        let mut console = MockConsoleSink::new();
        console.expect_write().never();

        let log = log_with(viewport, console, MockFatalHook::new());
        log.hello(Destination::Viewport);
    }

    #[test]
    fn test_both_writes_viewport_then_console() {
        let mut seq = Sequence::new();
        let mut viewport = MockViewportSink::new();
        viewport
            .expect_show()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut console = MockConsoleSink::new();
        console
            .expect_write()
            .with(function(|m: &Message| m.text == "A:42!"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let log = log_with(viewport, console, MockFatalHook::new());
        let options = DisplayOptions::default()
            .destination(Destination::Both)
            .prefix("A:")
            .suffix("!");
        log.number(42, &options);
    }

    #[test]
    fn test_fatal_terminates_after_sinks() {
        let mut seq = Sequence::new();
        let mut viewport = MockViewportSink::new();
        viewport
            .expect_show()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut console = MockConsoleSink::new();
        console
            .expect_write()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        console
            .expect_flush()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        let mut fatal = MockFatalHook::new();
        fatal
            .expect_terminate()
            .with(function(|m: &Message| {
                m.text == "reactor breach" && m.severity == Severity::Fatal
            }))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let log = log_with(viewport, console, fatal);
        log.debug_message(Severity::Fatal, "reactor breach", Destination::Both, 5.0);
    }

    #[test]
    fn test_non_fatal_severities_never_terminate() {
        let mut viewport = MockViewportSink::new();
        viewport.expect_show().return_const(());
        let mut console = MockConsoleSink::new();
        console.expect_write().return_const(());
        let mut fatal = MockFatalHook::new();
        fatal.expect_terminate().never();

        let log = log_with(viewport, console, fatal);
        for severity in [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ] {
            log.debug_message(severity, "fine", Destination::Both, 1.0);
        }
    }

    #[test]
    fn test_fatal_entry_point_uses_console() {
        let mut viewport = MockViewportSink::new();
        viewport.expect_show().never();
        let mut console = MockConsoleSink::new();
        console
            .expect_write()
            .with(function(|m: &Message| m.severity == Severity::Fatal))
            .times(1)
            .return_const(());
        console.expect_flush().times(1).return_const(());
        let mut fatal = MockFatalHook::new();
        fatal.expect_terminate().times(1).return_const(());

        let log = log_with(viewport, console, fatal);
        log.fatal("out of memory");
    }

    #[test]
    fn test_validity_severity() {
        let mut console = MockConsoleSink::new();
        console
            .expect_write()
            .with(function(|m: &Message| {
                m.text == "Valid" && m.severity == Severity::Success
            }))
            .times(1)
            .return_const(());
        console
            .expect_write()
            .with(function(|m: &Message| {
                m.text == "Invalid" && m.severity == Severity::Error
            }))
            .times(1)
            .return_const(());

        let log = log_with(MockViewportSink::new(), console, MockFatalHook::new());
        let owner = Arc::new(1);
        log.object_validity(&Some(owner.clone()), Destination::Console);
        log.object_validity(&None::<Arc<i32>>, Destination::Console);
    }

    #[test]
    fn test_config_defaults_flow_into_options() {
        let config = Config {
            destination: Destination::Both,
            display_time: 2.0,
            ..Config::default()
        };
        let log = Log::from_config(&config);
        let options = log.options();
        assert_eq!(options.destination, Destination::Both);
        assert_eq!(options.display_time, 2.0);
        assert_eq!(log.default_destination(), Destination::Both);
    }
}
