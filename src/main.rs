use anyhow::Result;
use clap::Parser;
use sentryx::cli::{Cli, Commands};
use sentryx::commands::{handle_scan, init_config, ScanConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            inputs,
            format,
            output,
            threshold,
            config,
            recent,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            handle_scan(ScanConfig {
                inputs,
                format: format.into(),
                output,
                threshold,
                config_path: config,
                recent,
                plain,
            })
        }
        Commands::Init { force } => init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
