//! Union of per-lane fragments into one global net, with message edges
//! overlaid as inter-lane bridges.

use std::collections::HashSet;

use log::{debug, warn};

use crate::errors::{FlowcheckError, FlowcheckResult};
use crate::models::bpmn::MessageEdge;
use crate::models::diagnostics::{BuildDiagnostics, MissingAnchor, UnresolvedEdge};
use crate::models::petri::{names, PetriArc, PetriNet};

pub struct NetMerger;

impl NetMerger {
    /// Merge lane fragments and bridge them with message places.
    ///
    /// Fragment names are already lane-qualified (element-scoped `p_pre`/
    /// `p_post`/`t_` names, lane-scoped start/end places), so the union must be
    /// collision-free; any residual duplicate is a `MergeConflict` and indicates
    /// a parser or builder defect. Each message edge contributes one dedicated
    /// message place, an unbounded buffer between the source and target
    /// transitions. A message endpoint with no resolvable transition skips that
    /// half of the bridge and is reported in the diagnostics.
    pub fn merge(
        fragments: Vec<PetriNet>,
        message_edges: &[MessageEdge],
    ) -> FlowcheckResult<(PetriNet, BuildDiagnostics)> {
        let mut merged = PetriNet::new();
        let mut diagnostics = BuildDiagnostics::new();
        let mut place_set: HashSet<String> = HashSet::new();
        let mut transition_set: HashSet<String> = HashSet::new();

        for fragment in fragments {
            for place in fragment.places {
                if !place_set.insert(place.clone()) {
                    return Err(FlowcheckError::MergeConflict { kind: "place", name: place });
                }
                merged.places.push(place);
            }
            for transition in fragment.transitions {
                if !transition_set.insert(transition.clone()) {
                    return Err(FlowcheckError::MergeConflict {
                        kind: "transition",
                        name: transition,
                    });
                }
                merged.transitions.push(transition);
            }
            merged.arcs.extend(fragment.arcs);
            // Initial markings are disjoint by construction; this is a plain
            // union, never an addition of counts.
            for (place, tokens) in fragment.initial_marking {
                if merged.initial_marking.insert(place.clone(), tokens).is_some() {
                    return Err(FlowcheckError::MergeConflict { kind: "marking", name: place });
                }
            }
            merged.final_markings.extend(fragment.final_markings);
        }

        for message in message_edges {
            let message_place = names::message_place(&message.id);
            if !place_set.insert(message_place.clone()) {
                return Err(FlowcheckError::MergeConflict {
                    kind: "place",
                    name: message_place,
                });
            }
            merged.places.push(message_place.clone());

            let source_transition = names::transition(&message.source);
            let target_transition = names::transition(&message.target);
            let source_ok = transition_set.contains(&source_transition);
            let target_ok = transition_set.contains(&target_transition);

            if source_ok {
                merged.arcs.push(PetriArc::new(source_transition, message_place.clone()));
            }
            if target_ok {
                merged.arcs.push(PetriArc::new(message_place.clone(), target_transition));
            }

            let missing = match (source_ok, target_ok) {
                (true, true) => continue,
                (false, true) => MissingAnchor::Source,
                (true, false) => MissingAnchor::Target,
                (false, false) => MissingAnchor::Both,
            };
            let unresolved = UnresolvedEdge {
                edge_id: message.id.clone(),
                source: message.source.clone(),
                target: message.target.clone(),
                missing,
                lane: None,
            };
            warn!("dropped {unresolved}");
            diagnostics.push(unresolved);
        }

        debug!(
            "merged net: {} places, {} transitions, {} arcs",
            merged.places.len(),
            merged.transitions.len(),
            merged.arcs.len()
        );
        Ok((merged, diagnostics))
    }
}
