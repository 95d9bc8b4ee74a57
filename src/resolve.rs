//! Reuse-or-default resolution for network, subnet and storage references.
//!
//! Every resolver is total: an absent identifier selects a well-defined
//! default, never an error. Each reference is resolved once at plan build
//! time and never re-evaluated.

use log::debug;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// The network the server is placed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkReference {
    /// Reference an existing network by identifier
    Existing { id: String },
    /// The account's default network
    Default,
}

/// The subnets the server may be launched into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubnetSelection {
    /// A single explicit subnet pinned to an availability zone
    Explicit {
        id: String,
        availability_zone: String,
    },
    /// Any public subnet, any zone
    AnyPublic,
}

/// The bucket save files are synced to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageReference {
    /// Reference an existing bucket by name
    Existing { name: String },
    /// Declare a new bucket with a generated name
    Create { name: String },
}

impl StorageReference {
    /// The bucket name downstream consumers use. Never empty: the `Create`
    /// variant carries its generated name.
    pub fn name(&self) -> &str {
        match self {
            StorageReference::Existing { name } => name,
            StorageReference::Create { name } => name,
        }
    }
}

pub fn resolve_network(vpc_id: &str) -> NetworkReference {
    if vpc_id.is_empty() {
        debug!("No network id configured, using the default network");
        NetworkReference::Default
    } else {
        debug!("Using existing network {}", vpc_id);
        NetworkReference::Existing {
            id: vpc_id.to_string(),
        }
    }
}

/// An explicit selection needs both the subnet id and its zone; anything
/// less falls back to public subnets.
pub fn resolve_subnet(subnet_id: &str, availability_zone: &str) -> SubnetSelection {
    if !subnet_id.is_empty() && !availability_zone.is_empty() {
        debug!("Pinning server to subnet {} in {}", subnet_id, availability_zone);
        SubnetSelection::Explicit {
            id: subnet_id.to_string(),
            availability_zone: availability_zone.to_string(),
        }
    } else {
        debug!("Using public subnets in any zone");
        SubnetSelection::AnyPublic
    }
}

pub fn resolve_bucket(bucket_name: &str, prefix: &str) -> StorageReference {
    if bucket_name.is_empty() {
        let name = generated_bucket_name(prefix);
        debug!("No bucket configured, will create {}", name);
        StorageReference::Create { name }
    } else {
        debug!("Reusing existing bucket {}", bucket_name);
        StorageReference::Existing {
            name: bucket_name.to_string(),
        }
    }
}

/// Deterministic name for a newly declared save bucket. Bucket naming rules
/// are stricter than resource-name prefixes, so the prefix is sanitized and
/// suffixed with a short hash to keep names stable per prefix yet unlikely
/// to collide globally.
fn generated_bucket_name(prefix: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}-saves-{}", sanitize_for_bucket(prefix), &digest[..8])
}

/// Lowercase alphanumerics and hyphens only.
pub fn sanitize_for_bucket(prefix: &str) -> String {
    let mapped: String = prefix
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let trimmed = mapped.trim_matches('-');
    if trimmed.is_empty() {
        "gamehost".to_string()
    } else {
        trimmed.to_string()
    }
}
