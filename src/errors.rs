use thiserror::Error;

/// Custom error types for the flowcheck pipeline
#[derive(Debug, Error)]
pub enum FlowcheckError {
    /// The diagram document is structurally unusable. Fatal, aborts the run.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Two lane fragments still collide after lane qualification. This points at a
    /// parser or builder defect upstream and is never recoverable.
    #[error("Merge conflict: duplicate {kind} '{name}' across lane fragments")]
    MergeConflict { kind: &'static str, name: String },

    /// Strict mode only: edges that could not be wired are promoted from
    /// diagnostics to a hard failure.
    #[error("Unresolved edges: {0}")]
    UnresolvedEdges(String),

    /// A verifier name in the configuration has no registered implementation.
    #[error("Unknown verifier '{0}'")]
    UnknownVerifier(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A single verifier failed to evaluate a formula. Localized to that formula;
    /// the runner records it in the report instead of propagating it.
    #[error("Verifier error: {0}")]
    Verifier(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type specific to flowcheck operations
pub type FlowcheckResult<T> = Result<T, FlowcheckError>;
