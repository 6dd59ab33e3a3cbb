//! Install/remove a category against the hosts file.
//!
//! Every input is loaded and the new content computed before the hosts file is written,
//! so a failure anywhere leaves it untouched.

use crate::category::Category;
use crate::config::DataPaths;
use crate::error::Result;
use crate::merge;
use crate::platform::HostsFile;
use crate::store;

/// Line counts before and after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostsChange {
    pub before: usize,
    pub after: usize,
}

/// Merge a category snapshot into the hosts file, minus `whitelist`.
pub fn install_category(
    paths: &DataPaths,
    hosts: &dyn HostsFile,
    category: Category,
    whitelist: &[String],
) -> Result<HostsChange> {
    let block = store::load_snapshot(paths, category)?;
    let current = hosts.read()?;
    let before = current.len();
    let merged = merge::install(current, &block, whitelist);
    hosts.write(&merged)?;
    tracing::info!(
        %category,
        before,
        after = merged.len(),
        whitelisted = whitelist.len(),
        path = %hosts.path().display(),
        "installed category"
    );
    Ok(HostsChange {
        before,
        after: merged.len(),
    })
}

/// Strip a category's lines from the hosts file.
pub fn remove_category(
    paths: &DataPaths,
    hosts: &dyn HostsFile,
    category: Category,
) -> Result<HostsChange> {
    let block = store::load_snapshot(paths, category)?;
    let current = hosts.read()?;
    let remaining = merge::remove(&current, &block);
    hosts.write(&remaining)?;
    tracing::info!(
        %category,
        before = current.len(),
        after = remaining.len(),
        path = %hosts.path().display(),
        "removed category"
    );
    Ok(HostsChange {
        before: current.len(),
        after: remaining.len(),
    })
}
