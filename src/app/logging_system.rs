use super::config::{Config, LogFormat, LogLevel};
use super::initialization::{InitializationError, LogDirective};
use parking_lot::RwLock;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds and installs the tracing subscriber behind the console sink.
pub struct LoggingSystem {
    directives: RwLock<Vec<LogDirective>>,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self {
            directives: RwLock::new(Vec::new()),
        }
    }

    /// Parse and add a `target=level` directive. Malformed directives are skipped with a
    /// warning on stderr, since no subscriber exists yet to report them.
    pub fn add_directive(&self, directive_str: &str) -> Result<(), InitializationError> {
        match LogDirective::parse(directive_str) {
            Ok(directive) => {
                self.directives.write().push(directive);
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                eprintln!("Warning: {e}, skipping directive");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn build_filter_string(&self, default_level: LogLevel) -> String {
        let directives = self.directives.read();

        let mut filter_parts = Vec::with_capacity(directives.len() + 1);
        filter_parts.push(default_level.as_str().to_string());
        filter_parts.extend(directives.iter().map(LogDirective::to_filter_string));
        filter_parts.join(",")
    }

    pub fn initialize_tracing(
        &self,
        default_level: LogLevel,
        format: LogFormat,
    ) -> Result<(), InitializationError> {
        let filter_string = self.build_filter_string(default_level);

        let env_filter = EnvFilter::try_new(&filter_string).map_err(|e| {
            InitializationError::LoggingInitFailed {
                details: format!("Failed to create EnvFilter with '{filter_string}'"),
                source: Box::new(e),
            }
        })?;

        let result = match format {
            LogFormat::Compact => tracing::subscriber::set_global_default(
                tracing_subscriber::registry().with(env_filter).with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(true)
                        .compact(),
                ),
            ),
            LogFormat::Json => tracing::subscriber::set_global_default(
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json().flatten_event(true)),
            ),
        };

        result.map_err(|e| InitializationError::LoggingInitFailed {
            details: "Failed to set global tracing subscriber".to_string(),
            source: Box::new(e),
        })
    }

    pub fn directive_count(&self) -> usize {
        self.directives.read().len()
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the console subscriber described by `config`. Only the first call installs;
/// later calls report whether that first install succeeded.
pub fn setup_logging_safe(config: &Config) -> Result<(), InitializationError> {
    static INIT: Once = Once::new();
    static INIT_SUCCESS: AtomicBool = AtomicBool::new(false);

    INIT.call_once(|| {
        let logging_system = LoggingSystem::new();

        let result: Result<(), InitializationError> = (|| {
            for directive in &config.log_directives {
                logging_system.add_directive(directive)?;
            }
            if let Ok(from_env) = std::env::var("RUST_LOG") {
                // Bare levels in RUST_LOG are left to `log_level`
                for directive in from_env.split(',').filter(|d| d.contains('=')) {
                    logging_system.add_directive(directive)?;
                }
            }
            logging_system.initialize_tracing(config.log_level, config.log_format)
        })();

        match result {
            Ok(()) => INIT_SUCCESS.store(true, Ordering::SeqCst),
            Err(e) => eprintln!("Failed to initialize logging: {e}"),
        }
    });

    if INIT_SUCCESS.load(Ordering::SeqCst) {
        Ok(())
    } else {
        Err(InitializationError::LoggingInitFailed {
            details: "Logging system initialization failed".to_string(),
            source: Box::new(std::io::Error::other("Logging initialization error")),
        })
    }
}
