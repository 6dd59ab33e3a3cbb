//! Windows platform constants.

/// System hosts file.
pub const HOSTS_PATH: &str = "C:/Windows/System32/drivers/etc/hosts";

pub const PERMISSION_HINT: &str = "editing it needs an elevated (Administrator) prompt";
