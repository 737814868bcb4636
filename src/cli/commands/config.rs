//! Config Command
//!
//! Manage PlanWeave configuration.
//!
//! Usage:
//!   planweave config show [-f json|toml]
//!   planweave config path
//!   planweave config init [--force]

use crate::cli::CommandContext;
use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the effective configuration
pub fn show(context: &CommandContext, format: &str) -> Result<()> {
    println!(
        "{}",
        ConfigLoader::render(&context.config, format == "json")?
    );
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    println!("Configuration paths:");
    println!();

    if let Some(global) = ConfigLoader::global_config_path() {
        let exists = if global.exists() { "✓" } else { "✗" };
        println!("  Global:  {} {}", exists, global.display());
    } else {
        println!("  Global:  (not available)");
    }

    let project = ConfigLoader::project_config_path();
    let exists = if project.exists() { "✓" } else { "✗" };
    println!("  Project: {} {}", exists, project.display());
    Ok(())
}

/// Initialize project configuration
pub fn init(force: bool, output: &Output) -> Result<()> {
    let (config_path, written) = ConfigLoader::init_project(force)?;
    if written {
        output.success("Initialized project configuration");
    } else {
        output.warning("Project config already exists (use --force to overwrite)");
    }
    output.info(&format!("Config: {}", config_path.display()));
    Ok(())
}
