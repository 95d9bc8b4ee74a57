use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::resolve::{NetworkReference, StorageReference, SubnetSelection};
use crate::stack::{self, Access, DeployedUnit};
use crate::ui;

use super::print_call_outs;

/// Print a human-readable summary of the deployment plan.
pub fn run(config: &Config, script: &Path) -> Result<()> {
    let unit = stack::build(config, script)?;

    ui::print_step(&format!("Deployment plan for prefix '{}'", unit.prefix));
    println!("{}", "─".repeat(60));

    show_placement(&unit);
    show_server(&unit);
    show_perimeter(&unit);
    show_storage(&unit);
    show_startup(&unit);
    show_restart(&unit);

    println!();
    print_call_outs(config);

    Ok(())
}

fn show_placement(unit: &DeployedUnit) {
    match &unit.network {
        NetworkReference::Existing { id } => println!("  Network:  existing network {}", id),
        NetworkReference::Default => println!("  Network:  account default network"),
    }
    match &unit.subnets {
        SubnetSelection::Explicit {
            id,
            availability_zone,
        } => println!("  Subnets:  subnet {} in {}", id, availability_zone),
        SubnetSelection::AnyPublic => println!("  Subnets:  any public subnet"),
    }
}

fn show_server(unit: &DeployedUnit) {
    println!(
        "  Server:   {} ({}, {} GiB boot disk on {})",
        unit.server.name,
        unit.server.instance_type,
        unit.server.boot_disk.size_gib,
        unit.server.boot_disk.device_name
    );
    println!("  Image:    {}", unit.server.machine_image);
    println!(
        "  Identity: {} [{}]",
        unit.server.role,
        unit.server.managed_policies.join(", ")
    );
}

fn show_perimeter(unit: &DeployedUnit) {
    println!();
    println!("  Ingress ({}):", unit.perimeter.name);
    for rule in &unit.perimeter.rules {
        println!(
            "    {:<4} {:<6} from {:<12} {}",
            rule.protocol.to_string(),
            rule.port,
            rule.source,
            rule.description
        );
    }
}

fn show_storage(unit: &DeployedUnit) {
    println!();
    match &unit.saves_bucket {
        StorageReference::Existing { name } => println!("  Save bucket: reuse {}", name),
        StorageReference::Create { name } => println!("  Save bucket: create {}", name),
    }
    println!(
        "  Install asset: s3://{}/{} (sha256 {})",
        unit.install_asset.bucket,
        unit.install_asset.object_key,
        &unit.install_asset.sha256[..12]
    );
    for grant in &unit.grants {
        let access = match grant.access {
            Access::Read => "read",
            Access::ReadWrite => "read-write",
        };
        println!("    {} has {} on {}", grant.grantee, access, grant.resource);
    }
}

fn show_startup(unit: &DeployedUnit) {
    println!();
    println!("  Startup commands:");
    for (i, command) in unit.startup_commands.iter().enumerate() {
        println!("    {}. {}", i + 1, command);
    }
}

fn show_restart(unit: &DeployedUnit) {
    println!();
    match &unit.restart {
        Some(restart) => {
            println!(
                "  Restart API: {} → {} ({}s timeout, unauthenticated)",
                restart.api_name, restart.target_instance, restart.timeout_secs
            );
            println!(
                "    allowed action: {} on {}",
                restart.allowed_action, restart.resource_scope
            );
        }
        None => println!("  Restart API: disabled"),
    }
}
