use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An assignment of token counts to places. Places absent from the map hold
/// zero tokens. Ordered so the serialized form is reproducible.
pub type Marking = BTreeMap<String, u64>;

/// A directed arc. Endpoints are place or transition names; an arc only ever
/// connects a place to a transition or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetriArc {
    pub source: String,
    pub target: String,
}

impl PetriArc {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        PetriArc {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The translation target. Serializes to the fixed JSON shape:
/// `{ "places": [...], "transitions": [...], "arcs": [{"source","target"}],
///   "initial_marking": {place: tokens}, "final_markings": [marking] }`.
///
/// An empty `final_markings` list means "not specified".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetriNet {
    pub places: Vec<String>,
    pub transitions: Vec<String>,
    pub arcs: Vec<PetriArc>,
    pub initial_marking: Marking,
    pub final_markings: Vec<Marking>,
}

impl PetriNet {
    pub fn new() -> Self {
        PetriNet::default()
    }

    pub fn has_place(&self, name: &str) -> bool {
        self.places.iter().any(|p| p == name)
    }

    pub fn has_transition(&self, name: &str) -> bool {
        self.transitions.iter().any(|t| t == name)
    }

    pub fn has_arc(&self, source: &str, target: &str) -> bool {
        self.arcs.iter().any(|a| a.source == source && a.target == target)
    }

    /// Tokens on a place in the initial marking; absent means 0.
    pub fn initial_tokens(&self, place: &str) -> u64 {
        self.initial_marking.get(place).copied().unwrap_or(0)
    }
}

/// Node naming convention, fixed for compatibility with the serialized nets
/// produced by earlier versions of the pipeline.
pub mod names {
    use crate::models::bpmn::SequenceEdge;

    pub fn pre_place(element_id: &str) -> String {
        format!("p_pre_{element_id}")
    }

    pub fn post_place(element_id: &str) -> String {
        format!("p_post_{element_id}")
    }

    pub fn transition(element_id: &str) -> String {
        format!("t_{element_id}")
    }

    pub fn start_place(lane_name: &str) -> String {
        format!("p_start_{lane_name}")
    }

    pub fn end_place(lane_name: &str) -> String {
        format!("p_end_{lane_name}")
    }

    pub fn message_place(message_id: &str) -> String {
        format!("p_msg_{message_id}")
    }

    /// Silent transition realizing one sequence edge. Both anchors of a sequence
    /// edge are places, so the edge is wired through a dedicated transition to
    /// keep the net bipartite. Keyed by the edge id so parallel edges between
    /// the same element pair stay distinct.
    pub fn flow_transition(edge: &SequenceEdge) -> String {
        format!("t_flow_{}", edge.id)
    }
}
