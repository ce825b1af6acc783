use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a formula was recorded as failed. The first verifier to refute, error or
/// time out decides the kind; remaining verifiers are not consulted for that
/// formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// A verifier returned false.
    Refuted { verifier: String },
    /// A verifier failed to evaluate the formula.
    VerifierError { verifier: String, message: String },
    /// A verifier did not answer within the configured bound.
    VerifierTimeout { verifier: String },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Refuted { verifier } => write!(f, "refuted by {verifier}"),
            FailureKind::VerifierError { verifier, message } => {
                write!(f, "error in {verifier}: {message}")
            }
            FailureKind::VerifierTimeout { verifier } => write!(f, "timeout in {verifier}"),
        }
    }
}

/// One failed formula, with its position in the input list. Duplicated input
/// formulas yield duplicated failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaFailure {
    pub index: usize,
    pub formula: String,
    pub kind: FailureKind,
}

/// Outcome of checking a formula list against a net. Failures are ordered by
/// original formula index, not by completion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub generated_at: DateTime<Utc>,
    pub total_formulas: usize,
    pub failures: Vec<FormulaFailure>,
}

impl VerificationReport {
    pub fn new(total_formulas: usize, failures: Vec<FormulaFailure>) -> Self {
        VerificationReport {
            generated_at: Utc::now(),
            total_formulas,
            failures,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// The ordered sublist of failed formula strings.
    pub fn failed_formulas(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.formula.as_str()).collect()
    }
}
