use anyhow::Result;
use clap::Parser;
use log::info;

use flowcheck::config::FlowcheckConfig;

mod cli;
use cli::{Commands, FlowcheckCli};

// Root bindings so the cli modules can reach the library under crate:: paths.
use flowcheck::{config, models, pipeline, registry, runner};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = FlowcheckCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Load configuration, then apply command-line overrides
    let mut config = match &cli.config {
        Some(path) => FlowcheckConfig::from_file(path)?,
        None => FlowcheckConfig::default(),
    };
    if cli.strict {
        config.strict = true;
    }

    match &cli.command {
        Commands::Convert { diagram } => {
            cli::commands::convert::execute(&config, diagram)?;
        }
        Commands::Verify { formulas, diagram } => {
            let report = cli::commands::verify::execute(&config, formulas, diagram).await?;
            if !report.all_passed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
