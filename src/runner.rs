//! Evaluation of requirement formulas against a net using the registry.

use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::timeout;

use crate::errors::FlowcheckResult;
use crate::models::petri::PetriNet;
use crate::models::report::{FailureKind, FormulaFailure, VerificationReport};
use crate::registry::VerifierRegistry;

/// Load requirement formulas from a plain-text file: one per line, trimmed,
/// blank lines ignored.
pub fn load_formulas(path: &Path) -> FlowcheckResult<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub struct VerificationRunner {
    registry: VerifierRegistry,
    verifier_timeout: Duration,
}

impl VerificationRunner {
    pub fn new(registry: VerifierRegistry, verifier_timeout: Duration) -> Self {
        VerificationRunner { registry, verifier_timeout }
    }

    /// Check every formula against the net.
    ///
    /// For each formula every registered verifier is invoked in registration
    /// order; the formula fails on the first verifier that refutes it, errors,
    /// or exceeds the timeout, and the remaining verifiers are skipped for that
    /// formula only. A formula passes only when all verifiers agree it holds
    /// (veto semantics). Failures keep the input order, duplicates included.
    pub async fn run(&self, formulas: &[String], net: &PetriNet) -> VerificationReport {
        let mut failures = Vec::new();

        for (index, formula) in formulas.iter().enumerate() {
            if let Some(kind) = self.check_formula(formula, net).await {
                warn!("formula '{formula}' failed: {kind}");
                failures.push(FormulaFailure {
                    index,
                    formula: formula.clone(),
                    kind,
                });
            } else {
                debug!("formula '{formula}' passed {} verifier(s)", self.registry.len());
            }
        }

        VerificationReport::new(formulas.len(), failures)
    }

    /// `None` means the formula passed every verifier.
    async fn check_formula(&self, formula: &str, net: &PetriNet) -> Option<FailureKind> {
        for verifier in self.registry.verifiers() {
            let name = verifier.name().to_string();
            match timeout(self.verifier_timeout, verifier.verify(formula, net)).await {
                Ok(Ok(true)) => {}
                Ok(Ok(false)) => return Some(FailureKind::Refuted { verifier: name }),
                Ok(Err(e)) => {
                    return Some(FailureKind::VerifierError {
                        verifier: name,
                        message: e.to_string(),
                    });
                }
                Err(_) => return Some(FailureKind::VerifierTimeout { verifier: name }),
            }
        }
        None
    }
}
