//! Display configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::operand::Operand;

/// Errors from validating a [`DisplayConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Width outside the supported range
    #[error("display width {width} is outside {min}..={max}")]
    WidthOutOfRange {
        /// Requested width
        width: usize,
        /// Smallest supported width
        min: usize,
        /// Largest supported width
        max: usize,
    },
    /// Error marker is empty or would read back as a number
    #[error("invalid error marker {0:?}: must be non-empty and not a numeral")]
    InvalidErrorMarker(String),
}

/// Screen geometry and the text shown on an arithmetic fault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Characters the screen renders without reformatting
    pub width: usize,
    /// Text displayed after a faulting division
    pub error_marker: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            error_marker: Self::DEFAULT_ERROR_MARKER.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Default screen width
    pub const DEFAULT_WIDTH: usize = 8;
    /// Smallest supported width
    pub const MIN_WIDTH: usize = 8;
    /// Largest supported width (f64 keeps ~15 significant digits)
    pub const MAX_WIDTH: usize = 15;
    /// Default fault text
    pub const DEFAULT_ERROR_MARKER: &'static str = "Syntax Error!!";

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set screen width
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set fault text
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Checks the configuration is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_WIDTH..=Self::MAX_WIDTH).contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange {
                width: self.width,
                min: Self::MIN_WIDTH,
                max: Self::MAX_WIDTH,
            });
        }
        let reads_as_number = !Operand::number(self.error_marker.as_str())
            .coerce()
            .is_nan();
        if self.error_marker.trim().is_empty() || reads_as_number {
            return Err(ConfigError::InvalidErrorMarker(self.error_marker.clone()));
        }
        Ok(())
    }

    /// Longest buffer that still accepts a digit
    #[must_use]
    pub const fn digit_cap(&self) -> usize {
        self.width
    }

    /// Longest buffer that still accepts a decimal point
    #[must_use]
    pub const fn decimal_cap(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Significant digits used when a result must be shortened
    #[must_use]
    pub const fn max_precision(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Largest magnitude rendered without scientific notation (99999999 at width 8)
    #[must_use]
    pub fn overflow_threshold(&self) -> f64 {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        10f64.powi(width) - 1.0
    }
}
