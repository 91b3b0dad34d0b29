pub mod command;
pub mod config;
pub mod initialization;
pub mod logging_system;

pub use command::{Cli, Command, main, run};
pub use config::{Config, ConfigArgs, ConfigError, FatalAction, LogFormat, LogLevel};
pub use initialization::{InitializationError, LogDirective};
pub use logging_system::{LoggingSystem, setup_logging_safe};
