//! CLI command definitions and handlers.

pub mod analyze;

use clap::{Parser, Subcommand};

/// Snapcheck - Image quality and object analysis
#[derive(Parser)]
#[command(name = "snapcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared analyze arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub analyze: analyze::AnalyzeArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze images for quality findings
    Analyze(analyze::AnalyzeArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All analyzed images were clean.
    Success,
    /// At least one image was flagged.
    IssuesFound,
    /// A hard error aborted the run.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::IssuesFound => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
