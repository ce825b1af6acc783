pub mod builder;
pub mod config;
pub mod errors;
pub mod implementations;
pub mod merger;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod registry;
pub mod runner;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use builder::LaneNetBuilder;
pub use config::FlowcheckConfig;
pub use errors::{FlowcheckError, FlowcheckResult};
pub use implementations::{BoundedReachabilityVerifier, SyntaxVerifier};
pub use merger::NetMerger;
pub use models::{
    bpmn::{Collaboration, Element, ElementKind, Lane, MessageEdge, ProcessDef, SequenceEdge},
    diagnostics::{BuildDiagnostics, MissingAnchor, UnresolvedEdge},
    petri::{Marking, PetriArc, PetriNet},
    report::{FailureKind, FormulaFailure, VerificationReport},
};
pub use parser::CollaborationParser;
pub use pipeline::{convert_file, convert_str, ConversionOutcome};
pub use registry::VerifierRegistry;
pub use runner::{load_formulas, VerificationRunner};
pub use traits::Verifier;
