mod check;
mod init;
mod show;
mod synth;

pub use check::run as check;
pub use init::run as init;
pub use show::run as show;
pub use synth::run as synth;

use crate::bootstrap;
use crate::config::Config;
use crate::ui;

/// Operator call-outs shared by the reporting commands. The core silently
/// degrades a half-configured Duck DNS pair and deliberately leaves the
/// restart endpoint unauthenticated; both get surfaced here.
fn print_call_outs(config: &Config) {
    if bootstrap::dynamic_dns_half_configured(&config.duckdns_domain, &config.duckdns_token) {
        ui::print_warning(
            "Duck DNS is half-configured (one of domain/token is missing); the feature is disabled",
        );
    }
    if config.restart_api {
        ui::print_warning(
            "The restart endpoint is public and unauthenticated; anyone holding the URL can start the instance",
        );
    }
}
