//! Labeled corpus construction: the caller-side mapping from generated string
//! to expected correctness label.

use std::collections::HashSet;
use std::ops::Range;

use rand::{Rng, RngCore};

use crate::alphabet::Alphabet;
use crate::config::{ConfigError, GeneratorConfig};
use crate::generator::BracketGenerator;
use crate::policy::Mode;
use crate::rng::SeedSource;

/// One generated input together with the label a correct checker must agree
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledCase {
    /// The generated bracket string.
    pub input: String,
    /// Whether the string is balanced.
    pub expect_valid: bool,
    /// The mode that produced it.
    pub mode: Mode,
    /// The alphabet it was drawn from.
    pub alphabet: Alphabet,
}

/// An in-memory collection of labeled test inputs.
///
/// Duplicate strings are dropped on insertion: a corpus is keyed by input, and
/// a string that is both balanced and unbalanced cannot exist.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    cases: Vec<LabeledCase>,
}

impl Corpus {
    /// Build a corpus with fixed thresholds.
    ///
    /// Each round contributes one good and one bad case per mode, so a corpus
    /// holds up to `rounds * 4` cases before deduplication. A fixed `seed`
    /// reproduces the whole corpus; each case draws its own generation seed
    /// from the corpus-level RNG so cases still differ from one another.
    pub fn with_thresholds(
        rounds: usize,
        min_length: i32,
        min_imbrication: i32,
        alphabet: Alphabet,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = GeneratorConfig::new(min_length, min_imbrication);
        config.validate()?;

        let mut corpus_rng = SeedSource::from_option(seed).rng();
        let mut corpus = Corpus::default();
        let mut generator = BracketGenerator::new(config);

        for _ in 0..rounds {
            for mode in [Mode::Length, Mode::Imbrication] {
                for correct in [true, false] {
                    generator.set_seed(Some(corpus_rng.next_u64()));
                    let input = generator.generate(mode, alphabet, correct)?;
                    corpus.push(LabeledCase {
                        input,
                        expect_valid: correct,
                        mode,
                        alphabet,
                    });
                }
            }
        }

        Ok(corpus)
    }

    /// Build a corpus whose thresholds are drawn per case from `thresholds`.
    ///
    /// The range must start at 1 or above: a zero threshold yields the
    /// degenerate sentinel, which is balanced no matter which label the case
    /// was meant to carry.
    pub fn randomized(
        rounds: usize,
        thresholds: Range<i32>,
        alphabet: Alphabet,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if thresholds.start < 0 {
            return Err(ConfigError::NegativeThreshold {
                field: "threshold_range",
                value: thresholds.start,
            });
        }
        if thresholds.start == 0 {
            return Err(ConfigError::DegenerateThresholdRange {
                start: thresholds.start,
                end: thresholds.end,
            });
        }
        if thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholdRange {
                start: thresholds.start,
                end: thresholds.end,
            });
        }

        let mut corpus_rng = SeedSource::from_option(seed).rng();
        let mut corpus = Corpus::default();
        let mut generator = BracketGenerator::new(GeneratorConfig::default());

        for _ in 0..rounds {
            for mode in [Mode::Length, Mode::Imbrication] {
                for correct in [true, false] {
                    let threshold = corpus_rng.gen_range(thresholds.clone());
                    match mode {
                        Mode::Length => generator.set_min_length(threshold),
                        Mode::Imbrication => generator.set_min_imbrication(threshold),
                    }
                    generator.set_seed(Some(corpus_rng.next_u64()));
                    let input = generator.generate(mode, alphabet, correct)?;
                    corpus.push(LabeledCase {
                        input,
                        expect_valid: correct,
                        mode,
                        alphabet,
                    });
                }
            }
        }

        Ok(corpus)
    }

    fn push(&mut self, case: LabeledCase) {
        if self.cases.iter().all(|existing| existing.input != case.input) {
            self.cases.push(case);
        }
    }

    /// All cases, in insertion order.
    pub fn cases(&self) -> &[LabeledCase] {
        &self.cases
    }

    /// Number of distinct cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the corpus holds no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Look up the expected label for an input previously handed out.
    pub fn expected(&self, input: &str) -> Option<bool> {
        self.cases
            .iter()
            .find(|case| case.input == input)
            .map(|case| case.expect_valid)
    }

    /// Iterate over the cases.
    pub fn iter(&self) -> impl Iterator<Item = &LabeledCase> {
        self.cases.iter()
    }

    /// The distinct inputs of the corpus.
    pub fn inputs(&self) -> HashSet<&str> {
        self.cases.iter().map(|case| case.input.as_str()).collect()
    }
}
