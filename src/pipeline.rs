//! The document -> parse -> per-lane build -> merge pipeline.

use std::path::Path;

use log::info;

use crate::builder::LaneNetBuilder;
use crate::config::FlowcheckConfig;
use crate::errors::{FlowcheckError, FlowcheckResult};
use crate::merger::NetMerger;
use crate::models::bpmn::ProcessDef;
use crate::models::diagnostics::BuildDiagnostics;
use crate::models::petri::PetriNet;
use crate::parser::CollaborationParser;

/// The merged net plus everything observable about how it was built.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub net: PetriNet,
    pub diagnostics: BuildDiagnostics,
    /// Per-lane fragments, `(lane id, fragment)`, retained only when the
    /// configuration asks for intermediate artifacts.
    pub lane_nets: Option<Vec<(String, PetriNet)>>,
}

pub fn convert_file(path: &Path, config: &FlowcheckConfig) -> FlowcheckResult<ConversionOutcome> {
    let xml = std::fs::read_to_string(path)?;
    convert_str(&xml, config)
}

/// Translate a diagram document into one merged Petri net.
///
/// Lane fragments are built independently and consumed by the merge; the
/// merged net is the only artifact that persists. In strict mode any dropped
/// edge aborts the conversion instead of being reported as a warning.
pub fn convert_str(xml: &str, config: &FlowcheckConfig) -> FlowcheckResult<ConversionOutcome> {
    let collaboration = CollaborationParser::parse_str(xml)?;

    let mut diagnostics = BuildDiagnostics::new();
    let mut fragments = Vec::with_capacity(collaboration.lanes.len());
    let mut lane_nets = config.persist_lane_nets.then(Vec::new);

    let empty = ProcessDef::default();
    for lane in &collaboration.lanes {
        // A dangling process reference yields an empty-element lane, which
        // still contributes its start/end places.
        let process = lane
            .process_ref
            .as_deref()
            .and_then(|id| collaboration.process(id))
            .unwrap_or(&empty);
        let (fragment, lane_diagnostics) = LaneNetBuilder::build(lane, process);
        diagnostics.extend(lane_diagnostics);
        if let Some(kept) = lane_nets.as_mut() {
            kept.push((lane.id.clone(), fragment.clone()));
        }
        fragments.push(fragment);
    }

    let (net, merge_diagnostics) = NetMerger::merge(fragments, &collaboration.message_edges)?;
    diagnostics.extend(merge_diagnostics);

    if config.strict && !diagnostics.is_empty() {
        return Err(FlowcheckError::UnresolvedEdges(diagnostics.edge_ids().join(", ")));
    }

    info!(
        "converted {} lane(s) into a net with {} places, {} transitions, {} arcs",
        collaboration.lanes.len(),
        net.places.len(),
        net.transitions.len(),
        net.arcs.len()
    );
    Ok(ConversionOutcome { net, diagnostics, lane_nets })
}
