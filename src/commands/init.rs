use anyhow::Result;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Sentryx Configuration

[detection]
# Confidence threshold recorded for each scan, (0.0, 1.0]
confidence_threshold = 0.25

[history]
# Scan summaries retained per session, oldest evicted first
capacity = 10

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
