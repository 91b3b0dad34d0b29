use super::{Config, ConfigError};
use crate::app::initialization::LogDirective;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate display time
        if !self.display_time.is_finite() || self.display_time < 0.0 {
            return Err(ConfigError::InvalidConfig(format!(
                "Display time must be a finite, non-negative number of seconds (got {})",
                self.display_time
            )));
        }

        // Validate board capacity
        if self.board_capacity == 0 {
            return Err(ConfigError::InvalidConfig(
                "Board capacity must be greater than 0".to_string(),
            ));
        }

        // Validate tracing directives
        for directive in &self.log_directives {
            LogDirective::parse(directive).map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid log directive: {e}"))
            })?;
        }

        Ok(())
    }
}
