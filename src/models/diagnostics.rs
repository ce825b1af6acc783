use std::fmt;

use serde::{Deserialize, Serialize};

/// Which anchor of an edge could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingAnchor {
    Source,
    Target,
    Both,
}

/// A sequence or message edge that could not be fully wired into the net.
///
/// The original pipeline dropped such edges silently, which hid malformed
/// diagrams. Every dropped edge (or dropped half of a message bridge) now
/// produces exactly one of these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnresolvedEdge {
    pub edge_id: String,
    pub source: String,
    pub target: String,
    pub missing: MissingAnchor,
    /// Lane the edge belongs to; `None` for cross-lane message edges.
    pub lane: Option<String>,
}

impl fmt::Display for UnresolvedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = match self.missing {
            MissingAnchor::Source => "source anchor",
            MissingAnchor::Target => "target anchor",
            MissingAnchor::Both => "both anchors",
        };
        match &self.lane {
            Some(lane) => write!(
                f,
                "edge '{}' ({} -> {}) in lane '{}': {} missing",
                self.edge_id, self.source, self.target, lane, missing
            ),
            None => write!(
                f,
                "message edge '{}' ({} -> {}): {} missing",
                self.edge_id, self.source, self.target, missing
            ),
        }
    }
}

/// Warnings accumulated while building and merging lane nets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildDiagnostics {
    pub unresolved_edges: Vec<UnresolvedEdge>,
}

impl BuildDiagnostics {
    pub fn new() -> Self {
        BuildDiagnostics::default()
    }

    pub fn is_empty(&self) -> bool {
        self.unresolved_edges.is_empty()
    }

    pub fn push(&mut self, edge: UnresolvedEdge) {
        self.unresolved_edges.push(edge);
    }

    pub fn extend(&mut self, other: BuildDiagnostics) {
        self.unresolved_edges.extend(other.unresolved_edges);
    }

    /// Edge ids of every unresolved edge, for strict-mode error messages.
    pub fn edge_ids(&self) -> Vec<&str> {
        self.unresolved_edges.iter().map(|e| e.edge_id.as_str()).collect()
    }
}
