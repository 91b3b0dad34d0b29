use super::serde_helpers::{load_env_enum, load_env_list, load_env_path_opt, load_env_var};
use super::{ConfigError, FatalAction, LogFormat, LogLevel};
use crate::domain::{DEFAULT_DISPLAY_TIME, Destination};
use crate::sink::DEFAULT_BOARD_CAPACITY;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Library-wide defaults and console setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination used by entry points that are not given one
    pub destination: Destination,
    /// Seconds a viewport message stays on screen
    pub display_time: f32,
    /// Maximum number of messages kept on the overlay board
    pub board_capacity: usize,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    /// Extra tracing directives, e.g. `my_game=debug`
    pub log_directives: Vec<String>,
    /// What Fatal does after the message is written
    pub on_fatal: FatalAction,
    /// File the values were loaded from, if any
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            destination: Destination::Console,
            display_time: DEFAULT_DISPLAY_TIME,
            board_capacity: DEFAULT_BOARD_CAPACITY,
            log_level: LogLevel::Info,
            log_format: LogFormat::Compact,
            log_directives: Vec::new(),
            on_fatal: FatalAction::Abort,
            config_file: None,
        }
    }
}

impl Config {
    /// Defaults, then the file named by `DEBUG_LOG_CONFIG`, then the other variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config_file = None;
        load_env_path_opt("DEBUG_LOG_CONFIG", &mut config_file);

        let mut config = match &config_file {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        config.config_file = config_file;

        load_env_enum("DEBUG_LOG_DESTINATION", &mut config.destination)?;
        load_env_var("DEBUG_LOG_DISPLAY_TIME", &mut config.display_time)?;
        load_env_var("DEBUG_LOG_BOARD_CAPACITY", &mut config.board_capacity)?;
        load_env_enum("DEBUG_LOG_LEVEL", &mut config.log_level)?;
        load_env_enum("DEBUG_LOG_FORMAT", &mut config.log_format)?;
        load_env_list("DEBUG_LOG_DIRECTIVES", &mut config.log_directives);
        load_env_enum("DEBUG_LOG_ON_FATAL", &mut config.on_fatal)?;

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Command-line flags, each falling back to its environment variable. Values that were
/// not given stay `None` and leave the config file or the default in place.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ConfigArgs {
    /// Destination used by entry points that are not given one [default: console]
    #[arg(long, env = "DEBUG_LOG_DESTINATION")]
    pub destination: Option<Destination>,

    /// Seconds a viewport message stays on screen [default: 5]
    #[arg(long, env = "DEBUG_LOG_DISPLAY_TIME")]
    pub display_time: Option<f32>,

    /// Maximum number of messages kept on the overlay board [default: 64]
    #[arg(long, env = "DEBUG_LOG_BOARD_CAPACITY")]
    pub board_capacity: Option<usize>,

    /// Console log level [default: info]
    #[arg(long, env = "DEBUG_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Console line format [default: compact]
    #[arg(long, env = "DEBUG_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Extra tracing directives, e.g. `my_game=debug`
    #[arg(
        long = "log-directive",
        env = "DEBUG_LOG_DIRECTIVES",
        value_delimiter = ','
    )]
    pub log_directives: Option<Vec<String>>,

    /// What Fatal does after the message is written [default: abort]
    #[arg(long, env = "DEBUG_LOG_ON_FATAL")]
    pub on_fatal: Option<FatalAction>,

    /// Configuration file path (optional)
    #[arg(long = "config", env = "DEBUG_LOG_CONFIG")]
    pub config_file: Option<PathBuf>,
}

impl ConfigArgs {
    /// Overlay the values that were given on `base`.
    pub fn apply(self, mut base: Config) -> Config {
        if let Some(destination) = self.destination {
            base.destination = destination;
        }
        if let Some(display_time) = self.display_time {
            base.display_time = display_time;
        }
        if let Some(board_capacity) = self.board_capacity {
            base.board_capacity = board_capacity;
        }
        if let Some(log_level) = self.log_level {
            base.log_level = log_level;
        }
        if let Some(log_format) = self.log_format {
            base.log_format = log_format;
        }
        if let Some(log_directives) = self.log_directives {
            base.log_directives = log_directives;
        }
        if let Some(on_fatal) = self.on_fatal {
            base.on_fatal = on_fatal;
        }
        if self.config_file.is_some() {
            base.config_file = self.config_file;
        }
        base
    }

    /// Defaults, then the config file, then these values.
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let base = match &self.config_file {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }
}
