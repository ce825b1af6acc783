//! Conversion of one lane's elements and sequence edges into an isolated
//! Petri-net fragment.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::models::bpmn::{ElementKind, Lane, ProcessDef};
use crate::models::diagnostics::{BuildDiagnostics, MissingAnchor, UnresolvedEdge};
use crate::models::petri::{names, PetriArc, PetriNet};

pub struct LaneNetBuilder;

impl LaneNetBuilder {
    /// Build a self-contained fragment for one lane.
    ///
    /// The fragment gets a start place holding the lane's single initial token
    /// and an end place; every task/gateway element gets its pre-place,
    /// transition and post-place wired pre -> transition -> post; sequence
    /// edges connect egress anchors to ingress anchors through a silent
    /// transition. An edge whose anchors cannot both be resolved is dropped and
    /// reported in the returned diagnostics, never silently.
    pub fn build(lane: &Lane, process: &ProcessDef) -> (PetriNet, BuildDiagnostics) {
        let mut net = PetriNet::new();
        let mut diagnostics = BuildDiagnostics::new();
        let mut place_set: HashSet<String> = HashSet::new();

        let start_place = names::start_place(&lane.name);
        let end_place = names::end_place(&lane.name);
        for place in [&start_place, &end_place] {
            net.places.push(place.clone());
            place_set.insert(place.clone());
        }
        net.initial_marking.insert(start_place.clone(), 1);

        let kinds: HashMap<&str, ElementKind> = process
            .elements
            .iter()
            .map(|e| (e.id.as_str(), e.kind))
            .collect();

        for element in &process.elements {
            if !element.kind.has_transition() {
                continue;
            }
            let pre = names::pre_place(&element.id);
            let post = names::post_place(&element.id);
            let transition = names::transition(&element.id);
            for place in [&pre, &post] {
                net.places.push(place.clone());
                place_set.insert(place.clone());
            }
            net.transitions.push(transition.clone());
            net.arcs.push(PetriArc::new(pre, transition.clone()));
            net.arcs.push(PetriArc::new(transition, post));
        }

        for edge in &process.sequence_edges {
            let egress = match kinds.get(edge.source.as_str()) {
                Some(ElementKind::StartEvent) => start_place.clone(),
                _ => names::post_place(&edge.source),
            };
            let ingress = match kinds.get(edge.target.as_str()) {
                Some(ElementKind::EndEvent) => end_place.clone(),
                _ => names::pre_place(&edge.target),
            };

            let missing = match (place_set.contains(&egress), place_set.contains(&ingress)) {
                (true, true) => {
                    // Both anchors are places; wire them through a silent
                    // transition to keep the net bipartite.
                    let flow = names::flow_transition(edge);
                    net.transitions.push(flow.clone());
                    net.arcs.push(PetriArc::new(egress, flow.clone()));
                    net.arcs.push(PetriArc::new(flow, ingress));
                    continue;
                }
                (false, true) => MissingAnchor::Source,
                (true, false) => MissingAnchor::Target,
                (false, false) => MissingAnchor::Both,
            };
            let unresolved = UnresolvedEdge {
                edge_id: edge.id.clone(),
                source: edge.source.clone(),
                target: edge.target.clone(),
                missing,
                lane: Some(lane.name.clone()),
            };
            warn!("dropped {unresolved}");
            diagnostics.push(unresolved);
        }

        debug!(
            "lane '{}': {} places, {} transitions, {} arcs, {} dropped edge(s)",
            lane.name,
            net.places.len(),
            net.transitions.len(),
            net.arcs.len(),
            diagnostics.unresolved_edges.len()
        );
        (net, diagnostics)
    }
}
