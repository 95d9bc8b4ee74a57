//! Boot-time provisioning: the positional bootstrap argument vector and the
//! startup command sequence that carries it.

use crate::config::Config;
use crate::constants::{INSTALL_CLI_CMD, INSTALL_PREREQS_CMD};
use crate::shell;
use crate::stack::ScriptAsset;

/// Dynamic DNS is enabled only when both the domain and the token are
/// configured. A half-configured pair degrades to disabled; it never errors.
pub fn use_dynamic_dns(domain: &str, token: &str) -> bool {
    !domain.is_empty() && !token.is_empty()
}

/// True when exactly one of domain/token is set. The core still disables
/// the feature; the CLI uses this to warn the operator.
pub fn dynamic_dns_half_configured(domain: &str, token: &str) -> bool {
    domain.is_empty() != token.is_empty()
}

/// The positional argument vector passed to the install script, in fixed
/// order: bucket name, experimental-build flag, dynamic-DNS flag, Duck DNS
/// domain, Duck DNS token. Order and arity are a wire contract with the
/// script; do not change one side without the other.
pub fn bootstrap_args(config: &Config, bucket_name: &str) -> Vec<String> {
    let dynamic_dns = use_dynamic_dns(&config.duckdns_domain, &config.duckdns_token);
    vec![
        bucket_name.to_string(),
        config.use_experimental_build.to_string(),
        dynamic_dns.to_string(),
        config.duckdns_domain.clone(),
        config.duckdns_token.clone(),
    ]
}

/// The startup command sequence the instance runs on first boot:
/// prerequisites, CLI tool, asset download, then one combined line that
/// normalizes line endings and sets the execute bit before invoking the
/// script. Unset arguments are rendered as `''` to keep the arity intact.
pub fn startup_commands(config: &Config, asset: &ScriptAsset, bucket_name: &str) -> Vec<String> {
    let local_path = asset.local_path();
    let args: Vec<String> = bootstrap_args(config, bucket_name)
        .iter()
        .map(|a| shell::escape(a))
        .collect();

    vec![
        INSTALL_PREREQS_CMD.to_string(),
        INSTALL_CLI_CMD.to_string(),
        format!(
            "aws s3 cp s3://{}/{} {}",
            asset.bucket, asset.object_key, local_path
        ),
        format!(
            r"sed -i 's/\r$//' {path}; chmod +x {path}; sudo {path} {args}",
            path = local_path,
            args = args.join(" ")
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_asset() -> ScriptAsset {
        ScriptAsset {
            source_path: "scripts/install.sh".to_string(),
            sha256: "ab".repeat(32),
            bucket: "gamehost-assets".to_string(),
            object_key: "install-abababababab.sh".to_string(),
        }
    }

    #[test]
    fn test_use_dynamic_dns_requires_both() {
        assert!(use_dynamic_dns("x.duckdns.org", "abc"));
        assert!(!use_dynamic_dns("x.duckdns.org", ""));
        assert!(!use_dynamic_dns("", "abc"));
        assert!(!use_dynamic_dns("", ""));
    }

    #[test]
    fn test_half_configured_detection() {
        assert!(dynamic_dns_half_configured("x.duckdns.org", ""));
        assert!(dynamic_dns_half_configured("", "abc"));
        assert!(!dynamic_dns_half_configured("", ""));
        assert!(!dynamic_dns_half_configured("x.duckdns.org", "abc"));
    }

    #[test]
    fn test_bootstrap_args_exact_vector() {
        let config = Config {
            use_experimental_build: true,
            ..Config::default()
        };
        assert_eq!(
            bootstrap_args(&config, "my-bucket"),
            vec!["my-bucket", "true", "false", "", ""]
        );
    }

    #[test]
    fn test_bootstrap_args_with_dynamic_dns() {
        let config = Config {
            duckdns_domain: "factory.duckdns.org".to_string(),
            duckdns_token: "tok-123".to_string(),
            ..Config::default()
        };
        assert_eq!(
            bootstrap_args(&config, "saves"),
            vec!["saves", "false", "true", "factory.duckdns.org", "tok-123"]
        );
    }

    #[test]
    fn test_half_configured_args_degrade_to_disabled() {
        let config = Config {
            duckdns_domain: "factory.duckdns.org".to_string(),
            ..Config::default()
        };
        let args = bootstrap_args(&config, "saves");
        assert_eq!(args[2], "false");
        // The supplied half still travels in its slot
        assert_eq!(args[3], "factory.duckdns.org");
        assert_eq!(args[4], "");
    }

    #[test]
    fn test_startup_command_order() {
        let config = Config::default();
        let commands = startup_commands(&config, &test_asset(), "saves");
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], "sudo apt-get install unzip -y");
        assert!(commands[1].contains("awscli"));
        assert_eq!(
            commands[2],
            "aws s3 cp s3://gamehost-assets/install-abababababab.sh /tmp/install-abababababab.sh"
        );
    }

    #[test]
    fn test_invoke_line_normalizes_then_chmods_then_runs() {
        let config = Config::default();
        let commands = startup_commands(&config, &test_asset(), "saves");
        let line = &commands[3];

        let sed = line.find("sed -i 's/\\r$//'").expect("sed missing");
        let chmod = line.find("chmod +x").expect("chmod missing");
        let run = line.find("sudo /tmp/").expect("invocation missing");
        assert!(sed < chmod && chmod < run);
    }

    #[test]
    fn test_invoke_line_preserves_arity_of_empty_args() {
        let config = Config {
            use_experimental_build: true,
            ..Config::default()
        };
        let commands = startup_commands(&config, &test_asset(), "my-bucket");
        assert!(
            commands[3].ends_with("my-bucket true false '' ''"),
            "got: {}",
            commands[3]
        );
    }

    #[test]
    fn test_invoke_line_quotes_hostile_token() {
        let config = Config {
            duckdns_domain: "x.duckdns.org".to_string(),
            duckdns_token: "t;rm -rf /".to_string(),
            ..Config::default()
        };
        let commands = startup_commands(&config, &test_asset(), "saves");
        assert!(commands[3].ends_with("x.duckdns.org 't;rm -rf /'"));
    }
}
