use anyhow::Result;

use crate::bootstrap;
use crate::config::Config;
use crate::resolve::{self, NetworkReference, StorageReference, SubnetSelection};
use crate::ui;

use super::print_call_outs;

/// Print every resolution decision the plan would make, without touching
/// the install script or writing anything.
pub fn run(config: &Config) -> Result<()> {
    ui::print_step(&format!(
        "Configuration check for prefix '{}'",
        config.prefix
    ));
    println!("{}", "─".repeat(60));

    match resolve::resolve_network(&config.vpc_id) {
        NetworkReference::Existing { id } => println!("  Network:      existing network {}", id),
        NetworkReference::Default => println!("  Network:      account default network"),
    }

    match resolve::resolve_subnet(&config.subnet_id, &config.availability_zone) {
        SubnetSelection::Explicit {
            id,
            availability_zone,
        } => println!("  Subnets:      subnet {} in {}", id, availability_zone),
        SubnetSelection::AnyPublic => println!("  Subnets:      any public subnet"),
    }

    match resolve::resolve_bucket(&config.bucket_name, &config.prefix) {
        StorageReference::Existing { name } => println!("  Save bucket:  reuse {}", name),
        StorageReference::Create { name } => println!("  Save bucket:  create {}", name),
    }

    let build = if config.use_experimental_build {
        "experimental"
    } else {
        "early-access"
    };
    println!("  Server build: {}", build);

    if bootstrap::use_dynamic_dns(&config.duckdns_domain, &config.duckdns_token) {
        println!("  Duck DNS:     enabled ({})", config.duckdns_domain);
    } else {
        println!("  Duck DNS:     disabled");
    }

    let restart = if config.restart_api {
        "enabled (public HTTP endpoint)"
    } else {
        "disabled"
    };
    println!("  Restart API:  {}", restart);
    println!();

    print_call_outs(config);
    ui::print_success("Configuration is valid");

    Ok(())
}
