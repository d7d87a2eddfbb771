//! Threshold policies: the exit conditions a generation walk parametrizes over.

use crate::config::GeneratorConfig;

/// Which threshold policy drives a generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Terminate once the emitted string is at least `min_length` long.
    Length,
    /// Terminate once nesting depth has reached `min_imbrication` at least once.
    Imbrication,
}

impl Mode {
    /// Name of the configuration field holding this mode's threshold.
    pub(crate) fn threshold_field(self) -> &'static str {
        match self {
            Mode::Length => "min_length",
            Mode::Imbrication => "min_imbrication",
        }
    }
}

/// Step-wise threshold state, created fresh per generation call.
///
/// The length policy is level-triggered: satisfaction is recomputed from the
/// current emitted length on every observation. The imbrication policy is
/// sticky: once depth has reached the minimum the flag stays set even if the
/// stack later shrinks below it.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ThresholdPolicy {
    Length { min: i32, satisfied: bool },
    Imbrication { min: i32, reached: bool },
}

impl ThresholdPolicy {
    pub(crate) fn new(mode: Mode, config: &GeneratorConfig) -> Self {
        match mode {
            Mode::Length => ThresholdPolicy::Length {
                min: config.min_length,
                satisfied: false,
            },
            Mode::Imbrication => ThresholdPolicy::Imbrication {
                min: config.min_imbrication,
                reached: false,
            },
        }
    }

    /// The active minimum, used for validation and the degenerate case.
    pub(crate) fn threshold(&self) -> i32 {
        match *self {
            ThresholdPolicy::Length { min, .. } => min,
            ThresholdPolicy::Imbrication { min, .. } => min,
        }
    }

    /// Whether the threshold was satisfied as of the last observation.
    ///
    /// The walk consults this before each draw to pick the pre- or
    /// post-threshold alphabet slice.
    pub(crate) fn satisfied(&self) -> bool {
        match *self {
            ThresholdPolicy::Length { satisfied, .. } => satisfied,
            ThresholdPolicy::Imbrication { reached, .. } => reached,
        }
    }

    /// Record the state after a symbol was appended.
    pub(crate) fn observe(&mut self, emitted_len: usize, depth: usize) {
        match self {
            ThresholdPolicy::Length { min, satisfied } => {
                *satisfied = emitted_len as i32 >= *min;
            }
            ThresholdPolicy::Imbrication { min, reached } => {
                if depth as i32 >= *min {
                    *reached = true;
                }
            }
        }
    }
}
