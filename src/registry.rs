//! The statically enumerated set of verification engines.
//!
//! The original pipeline discovered verifiers by loading arbitrary code from a
//! filesystem directory. Here the mapping from name to implementation is fixed
//! at compile time and the enabled subset is chosen via configuration, which
//! keeps the verifier set auditable.

use std::sync::Arc;

use crate::config::FlowcheckConfig;
use crate::errors::{FlowcheckError, FlowcheckResult};
use crate::implementations::{BoundedReachabilityVerifier, SyntaxVerifier};
use crate::traits::Verifier;

pub struct VerifierRegistry {
    verifiers: Vec<Arc<dyn Verifier>>,
}

impl VerifierRegistry {
    /// Every verifier name this build knows about.
    pub fn available_names() -> &'static [&'static str] {
        &[SyntaxVerifier::NAME, BoundedReachabilityVerifier::NAME]
    }

    /// Instantiate the engines named in the configuration, in configuration
    /// order. An unknown name is a startup error, not a silent skip.
    pub fn from_config(config: &FlowcheckConfig) -> FlowcheckResult<Self> {
        let mut verifiers: Vec<Arc<dyn Verifier>> = Vec::with_capacity(config.verifiers.len());
        for name in &config.verifiers {
            let verifier: Arc<dyn Verifier> = match name.as_str() {
                SyntaxVerifier::NAME => Arc::new(SyntaxVerifier::new()),
                BoundedReachabilityVerifier::NAME => Arc::new(BoundedReachabilityVerifier::new()),
                _ => return Err(FlowcheckError::UnknownVerifier(name.clone())),
            };
            verifiers.push(verifier);
        }
        Ok(VerifierRegistry { verifiers })
    }

    /// Registry over an explicit engine list, mainly for tests and embedders.
    pub fn with_verifiers(verifiers: Vec<Arc<dyn Verifier>>) -> Self {
        VerifierRegistry { verifiers }
    }

    pub fn verifiers(&self) -> &[Arc<dyn Verifier>] {
        &self.verifiers
    }

    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.verifiers.len()
    }
}
