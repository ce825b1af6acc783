use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::ui;
use crate::config::FlowcheckConfig;
use crate::models::report::VerificationReport;
use crate::pipeline;
use crate::registry::VerifierRegistry;
use crate::runner::{load_formulas, VerificationRunner};

/// Verification command: build the net, check every formula, print the failed
/// ones. Individual verifier errors never abort the run; they fail their
/// formula and the run continues.
pub async fn execute(
    config: &FlowcheckConfig,
    formulas_path: &Path,
    diagram: &Path,
) -> Result<VerificationReport> {
    ui::print_header("Verifying CTL Requirements");

    let formulas = load_formulas(formulas_path)
        .with_context(|| format!("failed to load formulas from {}", formulas_path.display()))?;
    ui::print_info(&format!("Loaded {} formula(s)", formulas.len()));

    let outcome = pipeline::convert_file(diagram, config)
        .with_context(|| format!("failed to convert {}", diagram.display()))?;
    for unresolved in &outcome.diagnostics.unresolved_edges {
        ui::print_warning(&format!("dropped {}", unresolved));
    }

    let registry = VerifierRegistry::from_config(config)?;
    ui::print_info(&format!("Registered {} verifier(s)", registry.len()));

    let runner = VerificationRunner::new(registry, config.verifier_timeout());
    let spinner = ui::spinner_with_message("Checking formulas...");
    let report = runner.run(&formulas, &outcome.net).await;
    spinner.finish_and_clear();

    if report.all_passed() {
        ui::print_success(&format!("All {} formula(s) hold", report.total_formulas));
    } else {
        ui::print_error(&format!(
            "{} of {} formula(s) failed",
            report.failures.len(),
            report.total_formulas
        ));
        println!("Failed CTL expressions:");
        for failure in &report.failures {
            println!("{}", failure.formula);
        }
    }

    Ok(report)
}
