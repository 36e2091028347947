//! CLI command implementations for sentryx operations.
//!
//! Each submodule handles a specific command with its configuration and
//! execution logic:
//! - **scan**: Process detection exports as one session and render the report
//! - **init**: Initialize a new sentryx configuration file

pub mod init;
pub mod scan;

pub use init::init_config;
pub use scan::{handle_scan, ScanConfig};
