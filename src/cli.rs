use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentryx")]
#[command(about = "Infrastructure defect scan reporting and session analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze detection exports as one session, in order
    Scan {
        /// Detection export files, one scan each
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Confidence threshold for the scans, overriding the config
        #[arg(short = 't', long)]
        threshold: Option<f64>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Limit the history listing to the N most recent scans
        #[arg(long)]
        recent: Option<usize>,

        /// Plain ASCII output (no colors, no emoji)
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}
