use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_PREFIX;

/// Deployment configuration. Loaded once at process start from an optional
/// YAML file, then overlaid with `GAMEHOST_*` environment variables; the
/// environment wins. Empty strings mean "not configured" — the resolvers
/// fall back to defaults rather than erroring.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prefix for all resource names
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Existing network to place the server in; empty selects the default network
    #[serde(default)]
    pub vpc_id: String,
    /// Existing subnet to pin the server to; only honored together with availability_zone
    #[serde(default)]
    pub subnet_id: String,
    #[serde(default)]
    pub availability_zone: String,
    /// Existing save-file bucket to reuse; empty creates a new one
    #[serde(default)]
    pub bucket_name: String,
    /// Install the experimental server build instead of early-access
    #[serde(default)]
    pub use_experimental_build: bool,
    /// Expose a public HTTP endpoint that starts the server
    #[serde(default)]
    pub restart_api: bool,
    /// Duck DNS domain; the feature needs both domain and token
    #[serde(default)]
    pub duckdns_domain: String,
    #[serde(default)]
    pub duckdns_token: String,
    /// Account identifier used to scope the restart permission
    #[serde(default)]
    pub account: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            vpc_id: String::new(),
            subnet_id: String::new(),
            availability_zone: String::new(),
            bucket_name: String::new(),
            use_experimental_build: false,
            restart_api: false,
            duckdns_domain: String::new(),
            duckdns_token: String::new(),
            account: String::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file (if present) and the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = if path.as_ref().exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
            serde_yaml::from_str(&content).with_context(|| "Failed to parse YAML config")?
        } else {
            debug!(
                "No config file at {:?}, starting from defaults",
                path.as_ref()
            );
            Config::default()
        };

        config.overlay_env(|key| std::env::var(key).ok());

        if config.prefix.is_empty() {
            config.prefix = default_prefix();
        }

        Ok(config)
    }

    /// Apply environment overrides. The lookup is injected so the overlay
    /// stays testable without touching process state.
    pub fn overlay_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("GAMEHOST_PREFIX") {
            self.prefix = v;
        }
        if let Some(v) = var("GAMEHOST_VPC_ID") {
            self.vpc_id = v;
        }
        if let Some(v) = var("GAMEHOST_SUBNET_ID") {
            self.subnet_id = v;
        }
        if let Some(v) = var("GAMEHOST_AVAILABILITY_ZONE") {
            self.availability_zone = v;
        }
        if let Some(v) = var("GAMEHOST_BUCKET_NAME") {
            self.bucket_name = v;
        }
        if let Some(v) = var("GAMEHOST_USE_EXPERIMENTAL_BUILD") {
            self.use_experimental_build = parse_bool(&v);
        }
        if let Some(v) = var("GAMEHOST_RESTART_API") {
            self.restart_api = parse_bool(&v);
        }
        if let Some(v) = var("GAMEHOST_DUCKDNS_DOMAIN") {
            self.duckdns_domain = v;
        }
        if let Some(v) = var("GAMEHOST_DUCKDNS_TOKEN") {
            self.duckdns_token = v;
        }
        if let Some(v) = var("GAMEHOST_ACCOUNT") {
            self.account = v;
        }
    }
}

/// Parse a boolean-like environment value.
pub fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
