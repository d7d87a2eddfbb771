//! # Brackgen - Bracket test-input generation
//!
//! Brackgen produces synthetic bracket-sequence strings for exercising
//! external bracket-checker programs, together with the label (balanced or
//! unbalanced) a correct checker must agree with.
//!
//! The core is a seeded random walk over a push-down automaton: at each step
//! the walk draws uniformly from a small symbol slice keyed on the top of the
//! open-bracket stack and on a threshold policy (minimum length or minimum
//! nesting depth), then terminates once the stack and the policy reach the
//! requested balanced or unbalanced shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use brackgen::{Alphabet, BracketGenerator, GeneratorConfig, Mode};
//!
//! let config = GeneratorConfig::new(10, 0).with_seed(42);
//! let generator = BracketGenerator::new(config);
//!
//! let balanced = generator.generate(Mode::Length, Alphabet::Simple, true).unwrap();
//! assert!(balanced.len() >= 10);
//! ```

// Public modules
pub mod alphabet;
pub mod config;
pub mod corpus;
pub mod generator;
pub mod policy;
pub mod rng;
pub mod verdict;

// Re-export the main public API
pub use alphabet::{Alphabet, BracketKind, FILLER, SENTINEL, Symbol};
pub use config::{ConfigError, GeneratorConfig};
pub use corpus::{Corpus, LabeledCase};
pub use generator::BracketGenerator;
pub use policy::Mode;
pub use rng::SeedSource;
pub use verdict::{CheckerProtocol, INVALID_TOKEN, Outcome, VALID_TOKEN, Verdict, score};
