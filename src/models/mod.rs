pub mod bpmn;
pub mod diagnostics;
pub mod petri;
pub mod report;

pub use bpmn::{Collaboration, Element, ElementKind, Lane, MessageEdge, ProcessDef, SequenceEdge};
pub use diagnostics::{BuildDiagnostics, MissingAnchor, UnresolvedEdge};
pub use petri::{Marking, PetriArc, PetriNet};
pub use report::{FailureKind, FormulaFailure, VerificationReport};
