use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "flowcheck",
    about = "Translates BPMN collaboration diagrams into Petri nets and checks CTL requirements against them",
    version,
    author,
    long_about = None
)]
pub struct FlowcheckCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Treat dropped edges as a hard failure instead of warnings
    #[arg(short, long, global = true, default_value = "false")]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a BPMN diagram into a Petri net
    Convert {
        /// Path to the BPMN diagram
        diagram: PathBuf,
    },

    /// Check CTL requirement formulas against the net derived from a diagram
    Verify {
        /// Path to the formulas file (one CTL expression per line)
        formulas: PathBuf,

        /// Path to the BPMN diagram
        diagram: PathBuf,
    },
}
