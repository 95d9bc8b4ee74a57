use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::stack;
use crate::ui;

use super::print_call_outs;

/// Build the deployment plan and write it as pretty-printed JSON.
pub fn run(config: &Config, script: &Path, out: &Path) -> Result<()> {
    ui::print_step(&format!(
        "Synthesizing deployment plan for prefix '{}'",
        config.prefix
    ));

    let spinner = ui::create_spinner("Resolving resources...");

    spinner.set_message(format!("Hashing install script {}...", script.display()));
    let unit = stack::build(config, script)?;

    spinner.set_message(format!("Writing plan to {}...", out.display()));
    let json = serde_json::to_string_pretty(&unit).with_context(|| "Failed to serialize plan")?;
    fs::write(out, json).with_context(|| format!("Failed to write plan: {}", out.display()))?;

    spinner.finish_with_message(format!(
        "Plan written to {} (asset {})",
        out.display(),
        unit.install_asset.object_key
    ));

    print_call_outs(config);
    ui::print_success(&format!("Synthesized plan for {}", unit.server.name));

    Ok(())
}
