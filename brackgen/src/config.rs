//! Generator configuration and its validation errors.

use std::fmt;

/// Configuration and corpus-construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A threshold was negative (must be >= 0)
    NegativeThreshold { field: &'static str, value: i32 },
    /// A randomized threshold range was empty
    EmptyThresholdRange { start: i32, end: i32 },
    /// A randomized threshold range allowed 0, whose degenerate output is
    /// balanced regardless of the requested label
    DegenerateThresholdRange { start: i32, end: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeThreshold { field, value } => {
                write!(f, "Invalid {}: {} (must be >= 0)", field, value)
            }
            ConfigError::EmptyThresholdRange { start, end } => {
                write!(f, "Empty threshold range: {}..{}", start, end)
            }
            ConfigError::DegenerateThresholdRange { start, end } => {
                write!(
                    f,
                    "Degenerate threshold range: {}..{} (must start >= 1)",
                    start, end
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a [`BracketGenerator`](crate::generator::BracketGenerator).
///
/// Thresholds are signed so that out-of-range values are representable and can
/// be rejected at generation time rather than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Minimum emitted length for length-mode generation
    pub min_length: i32,
    /// Minimum nesting depth for imbrication-mode generation
    pub min_imbrication: i32,
    /// Seed for the per-call random source. `None` seeds from entropy, so
    /// output is not reproducible across runs.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            min_imbrication: 0,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the given thresholds and no seed.
    pub fn new(min_length: i32, min_imbrication: i32) -> Self {
        Self {
            min_length,
            min_imbrication,
            seed: None,
        }
    }

    /// Attach a fixed seed for reproducible generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate both thresholds.
    ///
    /// [`generate`](crate::generator::BracketGenerator::generate) only checks
    /// the threshold of the active mode; this checks everything up front,
    /// which is what callers configuring from external input want.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length < 0 {
            return Err(ConfigError::NegativeThreshold {
                field: "min_length",
                value: self.min_length,
            });
        }
        if self.min_imbrication < 0 {
            return Err(ConfigError::NegativeThreshold {
                field: "min_imbrication",
                value: self.min_imbrication,
            });
        }
        Ok(())
    }
}
