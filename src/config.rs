//! Startup configuration
//!
//! The configuration is built once in `main` and only read afterwards.

use crate::error::VisualizerError;

/// Read-only settings for array generation, layout and animation speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of elements in a generated array
    pub array_len: usize,
    /// Smallest value a generated element can take
    pub min_value: i32,
    /// Largest value a generated element can take
    pub max_value: i32,
    /// Columns left empty around the bar region (split evenly on both sides)
    pub side_pad: u16,
    /// Ticks per second at startup, after a sort finishes and after a reset
    pub default_tick_rate: u32,
    pub min_tick_rate: u32,
    pub max_tick_rate: u32,
    /// Amount Up/Down change the tick rate by
    pub tick_step: u32,
}

pub const DEFAULT_CONFIG: Config = Config {
    array_len: 100,
    min_value: 0,
    max_value: 100,
    side_pad: 4,
    default_tick_rate: 60,
    min_tick_rate: 10,
    max_tick_rate: 120,
    tick_step: 10,
};

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl Config {
    /// Check that the settings describe something that can be generated and animated
    pub fn validate(&self) -> Result<(), VisualizerError> {
        let reason = if self.array_len == 0 {
            "array length must be at least 1".to_string()
        } else if self.min_value > self.max_value {
            format!(
                "minimum value {} is greater than maximum value {}",
                self.min_value, self.max_value
            )
        } else if self.tick_step == 0 {
            "tick step must be positive".to_string()
        } else if self.min_tick_rate == 0 || self.min_tick_rate > self.max_tick_rate {
            format!(
                "tick rate bounds [{}, {}] are invalid",
                self.min_tick_rate, self.max_tick_rate
            )
        } else if !(self.min_tick_rate..=self.max_tick_rate).contains(&self.default_tick_rate) {
            format!(
                "default tick rate {} is outside [{}, {}]",
                self.default_tick_rate, self.min_tick_rate, self.max_tick_rate
            )
        } else {
            return Ok(());
        };

        Err(VisualizerError::InvalidConfig { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DEFAULT_CONFIG.validate().is_ok());
        assert_eq!(Config::default(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = Config {
            min_value: 10,
            max_value: 5,
            ..DEFAULT_CONFIG
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidConfig { .. }));
        assert!(err.to_string().contains("greater than"));
    }

    #[test]
    fn test_rejects_default_rate_out_of_range() {
        let config = Config {
            default_tick_rate: 500,
            ..DEFAULT_CONFIG
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_array() {
        let config = Config {
            array_len: 0,
            ..DEFAULT_CONFIG
        };
        assert!(config.validate().is_err());
    }
}
