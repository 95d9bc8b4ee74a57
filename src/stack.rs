//! Plan synthesis: compose the resolved references, the network perimeter,
//! the server shape, the install asset and the optional restart endpoint
//! into one deployable unit.
//!
//! Synthesis is a one-shot, in-order build with no retries and no partial
//! rollback; applying the plan is the provider's job and inherits its
//! all-or-nothing semantics.

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::bootstrap;
use crate::config::Config;
use crate::constants::*;
use crate::ingress::{self, IngressRule};
use crate::resolve::{self, NetworkReference, StorageReference, SubnetSelection, sanitize_for_bucket};

/// The install script, addressed by the SHA-256 of its content. Changing
/// the script changes the object key, which forces re-provisioning.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptAsset {
    pub source_path: String,
    pub sha256: String,
    pub bucket: String,
    pub object_key: String,
}

impl ScriptAsset {
    pub fn from_file<P: AsRef<Path>>(path: P, prefix: &str) -> Result<Self> {
        let content = fs::read(&path)
            .with_context(|| format!("Failed to read install script: {:?}", path.as_ref()))?;

        let mut hasher = Sha256::new();
        hasher.update(&content);
        let sha256 = hex::encode(hasher.finalize());

        Ok(ScriptAsset {
            source_path: path.as_ref().display().to_string(),
            object_key: format!("install-{}.sh", &sha256[..12]),
            bucket: format!("{}-assets", sanitize_for_bucket(prefix)),
            sha256,
        })
    }

    /// Where the startup sequence stages the script on the instance.
    pub fn local_path(&self) -> String {
        format!("{}/{}", SCRIPT_STAGING_DIR, self.object_key)
    }
}

/// The server's network perimeter with its fixed ingress rules.
#[derive(Debug, Serialize)]
pub struct Perimeter {
    pub name: String,
    pub description: String,
    pub rules: Vec<IngressRule>,
}

#[derive(Debug, Serialize)]
pub struct BlockDevice {
    pub device_name: String,
    pub size_gib: u32,
}

#[derive(Debug, Serialize)]
pub struct ServerSpec {
    pub name: String,
    /// Identity the instance assumes; grants are issued against it
    pub role: String,
    pub machine_image: String,
    pub instance_type: String,
    pub boot_disk: BlockDevice,
    pub managed_policies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Read,
    ReadWrite,
}

/// One access grant issued to the server's identity.
#[derive(Debug, Serialize)]
pub struct Grant {
    pub grantee: String,
    pub access: Access,
    pub resource: String,
}

/// The optional HTTP-triggered restart function. The endpoint is public and
/// unauthenticated: anyone holding the URL can start the instance. That is
/// a deliberate trust-boundary choice and is surfaced in the plan and the
/// CLI output rather than hidden. Starting an instance that is already
/// running is a no-op on the provider side, so concurrent invocations are
/// safe.
#[derive(Debug, Serialize)]
pub struct RestartEndpoint {
    pub function_name: String,
    pub description: String,
    pub timeout_secs: u64,
    pub target_instance: String,
    /// The only action the function's identity may perform
    pub allowed_action: String,
    pub resource_scope: String,
    pub api_name: String,
    pub unauthenticated: bool,
}

/// The fully resolved deployment plan.
#[derive(Debug, Serialize)]
pub struct DeployedUnit {
    pub generated_at: String,
    pub prefix: String,
    pub network: NetworkReference,
    pub subnets: SubnetSelection,
    pub perimeter: Perimeter,
    pub server: ServerSpec,
    pub saves_bucket: StorageReference,
    pub install_asset: ScriptAsset,
    pub startup_commands: Vec<String>,
    pub grants: Vec<Grant>,
    pub restart: Option<RestartEndpoint>,
}

/// Build the deployment plan from the loaded configuration and the install
/// script on disk.
pub fn build<P: AsRef<Path>>(config: &Config, script_path: P) -> Result<DeployedUnit> {
    let prefix = &config.prefix;
    debug!("Building deployment plan for prefix '{}'", prefix);

    let network = resolve::resolve_network(&config.vpc_id);
    let subnets = resolve::resolve_subnet(&config.subnet_id, &config.availability_zone);

    let perimeter = Perimeter {
        name: format!("{}ServerSecurityGroup", prefix),
        description: "Allow game clients to connect to the server".to_string(),
        rules: ingress::ingress_rules(),
    };

    let server = ServerSpec {
        name: format!("{}Server", prefix),
        role: format!("{}ServerRole", prefix),
        machine_image: MACHINE_IMAGE_PARAMETER.to_string(),
        instance_type: INSTANCE_TYPE.to_string(),
        boot_disk: BlockDevice {
            device_name: BOOT_DEVICE.to_string(),
            size_gib: BOOT_DISK_GIB,
        },
        managed_policies: vec![REMOTE_ADMIN_POLICY.to_string()],
    };

    let saves_bucket = resolve::resolve_bucket(&config.bucket_name, prefix);
    let install_asset = ScriptAsset::from_file(script_path, prefix)?;

    let grants = vec![
        Grant {
            grantee: server.role.clone(),
            access: Access::ReadWrite,
            resource: format!("bucket/{}", saves_bucket.name()),
        },
        Grant {
            grantee: server.role.clone(),
            access: Access::Read,
            resource: format!("s3://{}/{}", install_asset.bucket, install_asset.object_key),
        },
    ];

    let startup_commands = bootstrap::startup_commands(config, &install_asset, saves_bucket.name());

    let restart = if config.restart_api {
        Some(restart_endpoint(config, &server))
    } else {
        None
    };

    Ok(DeployedUnit {
        generated_at: Local::now().to_rfc3339(),
        prefix: prefix.clone(),
        network,
        subnets,
        perimeter,
        server,
        saves_bucket,
        install_asset,
        startup_commands,
        grants,
        restart,
    })
}

fn restart_endpoint(config: &Config, server: &ServerSpec) -> RestartEndpoint {
    let account = if config.account.is_empty() {
        "*"
    } else {
        config.account.as_str()
    };

    RestartEndpoint {
        function_name: format!("{}StartServer", config.prefix),
        description: "Restart game server".to_string(),
        timeout_secs: RESTART_TIMEOUT_SECS,
        target_instance: server.name.clone(),
        allowed_action: START_INSTANCE_ACTION.to_string(),
        resource_scope: format!("arn:aws:ec2:*:{}:instance/{}", account, server.name),
        api_name: format!("{}StartServerApi", config.prefix),
        unauthenticated: true,
    }
}
