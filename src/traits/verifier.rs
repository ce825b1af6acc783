use async_trait::async_trait;

use crate::errors::FlowcheckResult;
use crate::models::petri::PetriNet;

/// A pluggable verification unit: one checking engine that can evaluate a
/// temporal requirement formula against a Petri net.
///
/// Implementations are enumerated statically in the registry; there is no
/// dynamic code loading. The capability is async because engines may delegate
/// to external model checkers. An `Err` return means the engine could not
/// evaluate the formula at all; the runner treats that as a failure of the
/// formula, not of the run.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Stable name used in configuration and reports.
    fn name(&self) -> &str;

    /// Whether `formula` holds on `net` as far as this engine can tell.
    async fn verify(&self, formula: &str, net: &PetriNet) -> FlowcheckResult<bool>;
}
