/// Default resource-name prefix when none is configured
pub const DEFAULT_PREFIX: &str = "GameHost";

/// Source matching any inbound IPv4 address
pub const ANY_IPV4: &str = "0.0.0.0/0";

/// Main game traffic port (UDP and TCP)
pub const GAME_PORT: u16 = 7777;

/// Beacon port (UDP)
pub const BEACON_PORT: u16 = 15000;

/// Server query port (UDP)
pub const QUERY_PORT: u16 = 15777;

/// SSM parameter resolving to the pinned Ubuntu 20.04 machine image
pub const MACHINE_IMAGE_PARAMETER: &str =
    "/aws/service/canonical/ubuntu/server/20.04/stable/current/amd64/hvm/ebs-gp2/ami-id";

/// Instance size the server runs on
pub const INSTANCE_TYPE: &str = "m5a.large";

/// Boot disk device name
pub const BOOT_DEVICE: &str = "/dev/sda1";

/// Boot disk size in GiB
pub const BOOT_DISK_GIB: u32 = 15;

/// Managed policy granting remote administration of the instance
pub const REMOTE_ADMIN_POLICY: &str = "AmazonSSMManagedInstanceCore";

/// Action the restart function is allowed to perform
pub const START_INSTANCE_ACTION: &str = "ec2:StartInstances";

/// Time budget for one restart-function invocation, in seconds
pub const RESTART_TIMEOUT_SECS: u64 = 10;

/// Directory the install script is staged into on the instance
pub const SCRIPT_STAGING_DIR: &str = "/tmp";

/// First startup command: prerequisites for unpacking the CLI tool
pub const INSTALL_PREREQS_CMD: &str = "sudo apt-get install unzip -y";

/// Second startup command: fetch and install the provider CLI
pub const INSTALL_CLI_CMD: &str = "curl \"https://awscli.amazonaws.com/awscli-exe-linux-x86_64.zip\" -o \"awscliv2.zip\" && unzip awscliv2.zip && sudo ./aws/install";
