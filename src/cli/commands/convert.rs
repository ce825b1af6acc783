use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::cli::ui;
use crate::config::FlowcheckConfig;
use crate::models::petri::PetriNet;
use crate::pipeline;

/// Diagram conversion command: derive the Petri net and write it next to the
/// input as `<stem>_petri_net.json`.
pub fn execute(config: &FlowcheckConfig, diagram: &Path) -> Result<()> {
    ui::print_header("Converting BPMN Diagram");
    ui::print_info(&format!("Diagram: {}", diagram.display()));

    let outcome = pipeline::convert_file(diagram, config)
        .with_context(|| format!("failed to convert {}", diagram.display()))?;

    for unresolved in &outcome.diagnostics.unresolved_edges {
        ui::print_warning(&format!("dropped {}", unresolved));
    }

    ui::print_result("Number of places", &outcome.net.places.len().to_string());
    ui::print_result("Number of transitions", &outcome.net.transitions.len().to_string());
    ui::print_result("Number of arcs", &outcome.net.arcs.len().to_string());
    ui::print_result(
        "Initial marking",
        &serde_json::to_string(&outcome.net.initial_marking)?,
    );

    let output = output_path(diagram, "_petri_net.json");
    write_net(&outcome.net, &output)?;
    ui::print_success(&format!("Petri net saved to {}", output.display()));

    if let Some(lane_nets) = &outcome.lane_nets {
        for (lane_id, net) in lane_nets {
            let lane_output = output_path(diagram, &format!("_{lane_id}_lane_net.json"));
            write_net(net, &lane_output)?;
            info!("lane fragment saved to {}", lane_output.display());
        }
    }

    Ok(())
}

fn write_net(net: &PetriNet, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(net)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// `diagrams/shop.bpmn` -> `diagrams/shop<suffix>`.
fn output_path(diagram: &Path, suffix: &str) -> PathBuf {
    let stem = diagram
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "diagram".to_string());
    diagram.with_file_name(format!("{stem}{suffix}"))
}
