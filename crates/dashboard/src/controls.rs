//! Request Controls: strike-rate slider and row limits

use thiserror::Error;

/// Rejected control value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// Value outside the allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    /// Value not on the slider's step grid
    #[error("{field} value {value} is not a multiple of {step}")]
    OffStep {
        field: &'static str,
        value: u64,
        step: u64,
    },
}

/// Allowed ranges for dashboard controls
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Strike-rate slider bounds
    pub strike_rate_range: (u32, u32),
    /// Strike-rate slider step
    pub strike_rate_step: u32,
    /// Slider position when none is given
    pub default_strike_rate: u32,
    /// Row limit bounds for ranked lists
    pub limit_range: (usize, usize),
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            strike_rate_range: (100, 200),
            strike_rate_step: 5,
            default_strike_rate: 130,
            limit_range: (1, 50),
        }
    }
}

/// Validator for query controls
#[derive(Debug, Clone, Default)]
pub struct Controls {
    config: ControlConfig,
}

impl Controls {
    pub fn new(config: ControlConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: u64,
        range: (u64, u64),
    ) -> Result<u64, ControlError> {
        if value < range.0 || value > range.1 {
            Err(ControlError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(value)
        }
    }

    /// Resolve the strike-rate threshold, defaulting to the slider's start
    pub fn strike_rate(&self, requested: Option<u32>) -> Result<f64, ControlError> {
        let value = requested.unwrap_or(self.config.default_strike_rate);
        let (min, max) = self.config.strike_rate_range;
        self.validate_range("min_strike_rate", u64::from(value), (u64::from(min), u64::from(max)))?;

        let step = self.config.strike_rate_step;
        if step > 0 && (value - min) % step != 0 {
            return Err(ControlError::OffStep {
                field: "min_strike_rate",
                value: u64::from(value),
                step: u64::from(step),
            });
        }

        Ok(f64::from(value))
    }

    /// Resolve a row limit, falling back to `default`
    pub fn limit(&self, requested: Option<usize>, default: usize) -> Result<usize, ControlError> {
        let value = requested.unwrap_or(default);
        let (min, max) = self.config.limit_range;
        self.validate_range("limit", value as u64, (min as u64, max as u64))?;
        Ok(value)
    }
}
