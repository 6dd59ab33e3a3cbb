//! Unix (macOS, Linux) platform constants.

/// System hosts file.
pub const HOSTS_PATH: &str = "/etc/hosts";

pub const PERMISSION_HINT: &str = "editing it usually needs root; try sudo";
