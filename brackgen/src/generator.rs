//! The random bracket walk: one parametrized state machine covering every
//! (mode, correctness, alphabet) combination.

use rand::Rng;

use crate::alphabet::{Alphabet, BracketKind, SENTINEL, Symbol};
use crate::config::{ConfigError, GeneratorConfig};
use crate::policy::{Mode, ThresholdPolicy};
use crate::rng::SeedSource;

/// Generates bracket strings that are balanced or deliberately unbalanced,
/// driven by a length or nesting-depth threshold.
///
/// Each [`generate`](BracketGenerator::generate) call reseeds its own random
/// source from the configured seed, so calls are independent and a fixed seed
/// reproduces the identical string. Instances share no state; distinct
/// generators may run on different threads without coordination.
#[derive(Debug, Clone)]
pub struct BracketGenerator {
    config: GeneratorConfig,
}

impl BracketGenerator {
    /// Create a generator from a configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Set the length-mode threshold.
    pub fn set_min_length(&mut self, min_length: i32) {
        self.config.min_length = min_length;
    }

    /// Set the imbrication-mode threshold.
    pub fn set_min_imbrication(&mut self, min_imbrication: i32) {
        self.config.min_imbrication = min_imbrication;
    }

    /// Set or clear the seed used by subsequent calls.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config.seed = seed;
    }

    /// Produce one bracket string.
    ///
    /// With `correct` the walk runs until the open-bracket stack is empty and
    /// the active threshold is satisfied, yielding a balanced string. Without
    /// it the walk runs until the stack is non-empty and the threshold is
    /// satisfied, leaving at least one bracket permanently unclosed.
    ///
    /// The two exit conditions are deliberately not negations of each other:
    /// the unbalanced walk keys on stack *emptiness*, so it tends to stop the
    /// first time the stack becomes non-empty after the threshold is met.
    /// Downstream scoring depends on this bias; do not symmetrize it.
    ///
    /// A negative active threshold is a configuration error and nothing is
    /// emitted. A zero active threshold returns the [`SENTINEL`] string.
    pub fn generate(
        &self,
        mode: Mode,
        alphabet: Alphabet,
        correct: bool,
    ) -> Result<String, ConfigError> {
        let mut policy = ThresholdPolicy::new(mode, &self.config);

        let threshold = policy.threshold();
        if threshold < 0 {
            return Err(ConfigError::NegativeThreshold {
                field: mode.threshold_field(),
                value: threshold,
            });
        }
        if threshold == 0 {
            return Ok(SENTINEL.to_string());
        }

        let mut rng = SeedSource::from_option(self.config.seed).rng();
        let mut out = String::new();
        let mut stack: Vec<BracketKind> = Vec::new();

        loop {
            // The slice is keyed on the stack top and on the threshold state
            // as of the previous step.
            let slice = match stack.last() {
                None => alphabet.start_slice(),
                Some(&top) if !policy.satisfied() => alphabet.pre_threshold_slice(top),
                Some(&top) => alphabet.post_threshold_slice(top),
            };

            let symbol = slice[rng.gen_range(0..slice.len())];
            out.push(symbol.emit());
            match symbol {
                Symbol::Open(kind) => stack.push(kind),
                Symbol::Close(_) => {
                    stack.pop();
                }
                Symbol::Filler => {}
            }

            policy.observe(out.len(), stack.len());

            let done = if correct {
                stack.is_empty() && policy.satisfied()
            } else {
                !stack.is_empty() && policy.satisfied()
            };
            if done {
                break;
            }
        }

        Ok(out)
    }
}
