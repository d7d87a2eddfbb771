//! Classification of an external checker's output against the two expected
//! verdict tokens, and scoring of that verdict against a corpus label.

/// Token an agreeing checker prints for a balanced input.
pub const VALID_TOKEN: &str = "Bon parenthesage";

/// Token an agreeing checker prints for an unbalanced input.
pub const INVALID_TOKEN: &str = "Mauvais parenthesage";

/// A checker's verdict on one input, as read from its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Output matched the valid token.
    Valid,
    /// Output matched the invalid token.
    Invalid,
    /// Output matched neither token. Surfaced as-is, never coerced to a
    /// pass or fail.
    Undecided,
}

/// How one checker verdict compares with the expected label of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
    Undecided,
}

/// The fixed tokens a checker is expected to answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerProtocol {
    valid_token: String,
    invalid_token: String,
}

impl Default for CheckerProtocol {
    fn default() -> Self {
        Self {
            valid_token: VALID_TOKEN.to_string(),
            invalid_token: INVALID_TOKEN.to_string(),
        }
    }
}

impl CheckerProtocol {
    /// Use custom verdict tokens.
    pub fn new(valid_token: impl Into<String>, invalid_token: impl Into<String>) -> Self {
        Self {
            valid_token: valid_token.into(),
            invalid_token: invalid_token.into(),
        }
    }

    /// Classify one line of checker output.
    ///
    /// Surrounding whitespace is trimmed and the comparison ignores ASCII
    /// case; anything else about the output must match a token exactly.
    pub fn classify(&self, raw_output: &str) -> Verdict {
        let trimmed = raw_output.trim();
        if trimmed.eq_ignore_ascii_case(&self.valid_token) {
            Verdict::Valid
        } else if trimmed.eq_ignore_ascii_case(&self.invalid_token) {
            Verdict::Invalid
        } else {
            Verdict::Undecided
        }
    }

    /// Classify checker output and compare it with the expected label.
    pub fn score(&self, raw_output: &str, expect_valid: bool) -> Outcome {
        score(expect_valid, self.classify(raw_output))
    }
}

/// Compare a verdict with the expected label of the input it was given.
pub fn score(expect_valid: bool, verdict: Verdict) -> Outcome {
    match verdict {
        Verdict::Valid if expect_valid => Outcome::Pass,
        Verdict::Invalid if !expect_valid => Outcome::Pass,
        Verdict::Undecided => Outcome::Undecided,
        _ => Outcome::Fail,
    }
}
