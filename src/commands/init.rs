use anyhow::{Context, Result};
use std::path::Path;

use crate::ui;

/// Template configuration with comments
const CONFIG_TEMPLATE: &str = r#"# gamehost configuration file
#
# Every value can also be supplied via a GAMEHOST_* environment variable
# (GAMEHOST_PREFIX, GAMEHOST_VPC_ID, ...); the environment wins over this
# file.

# Prefix for all resource names (optional, default: GameHost)
prefix: GameHost

# Place the server in an existing network (optional)
# Leave empty to use the account's default network.
vpc_id: ""

# Pin the server to a specific subnet (optional)
# Both values must be set; otherwise any public subnet is used.
subnet_id: ""
availability_zone: ""

# Reuse an existing save-file bucket (optional)
# Leave empty to create a new bucket with a generated name.
bucket_name: ""

# Install the experimental server build instead of early-access
use_experimental_build: false

# Expose a public HTTP endpoint that starts the server (optional)
# WARNING: the endpoint is unauthenticated.
restart_api: false

# Duck DNS (optional). The feature is enabled only when both domain and
# token are set.
duckdns_domain: ""
# Prefer GAMEHOST_DUCKDNS_TOKEN in the environment over writing the token here.
duckdns_token: ""

# Account identifier used to scope the restart permission (optional)
account: ""
"#;

pub fn run(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        ui::print_error(&format!(
            "Configuration file already exists at: {}",
            config_path.display()
        ));
        ui::print_step("Use a different path with --config or remove the existing file");
        std::process::exit(1);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ui::print_success(&format!(
        "Created configuration file at: {}",
        config_path.display()
    ));
    ui::print_step("Edit the file to customize your deployment settings");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_template_parses_as_config() {
        let config: Config = serde_yaml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.prefix, "GameHost");
        assert_eq!(config.vpc_id, "");
        assert!(!config.restart_api);
    }

    #[test]
    fn test_run_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/gamehost.yml");
        run(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, CONFIG_TEMPLATE);
    }
}
