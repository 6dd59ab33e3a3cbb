//! Per-category status: snapshot freshness and how much of it is in the hosts file.

use chrono::{DateTime, Local};
use std::error::Error as _;

use crate::category::Category;
use crate::config::DataPaths;
use crate::lines::LineSet;
use crate::platform::HostsFile;
use crate::store;

/// How much of a snapshot is present in the hosts file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installed {
    Yes,
    Partial,
    No,
    /// Hosts file could not be read.
    Unknown,
}

impl Installed {
    pub fn label(self) -> &'static str {
        match self {
            Installed::Yes => "installed",
            Installed::Partial => "partial",
            Installed::No => "not installed",
            Installed::Unknown => "unknown",
        }
    }
}

/// Status of a single category.
#[derive(Debug, Clone)]
pub struct CategoryStatus {
    pub category: Category,
    /// None when the category was never refreshed.
    pub lines: Option<usize>,
    pub updated: Option<DateTime<Local>>,
    pub installed: Installed,
    /// Why the snapshot could not be read, if it exists but is unreadable.
    pub unreadable: Option<String>,
}

/// Compare `snapshot` with hosts content. Blank lines and comments are not counted.
pub fn installed_state(hosts: &LineSet, snapshot: &LineSet) -> Installed {
    let entries: Vec<&str> = snapshot
        .iter()
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    if entries.is_empty() {
        return Installed::No;
    }
    let present = entries.iter().filter(|&&l| hosts.contains(l)).count();
    if present == entries.len() {
        Installed::Yes
    } else if present == 0 {
        Installed::No
    } else {
        Installed::Partial
    }
}

/// Status of every category, in category order.
pub fn category_statuses(paths: &DataPaths, hosts: &dyn HostsFile) -> Vec<CategoryStatus> {
    let current = match hosts.read() {
        Ok(lines) => Some(lines),
        Err(e) => {
            tracing::warn!(error = %e, "cannot read hosts file");
            None
        }
    };

    let mut out = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let path = paths.snapshot(category);
        if !path.is_file() {
            out.push(CategoryStatus {
                category,
                lines: None,
                updated: None,
                installed: Installed::No,
                unreadable: None,
            });
            continue;
        }
        let updated = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);
        let snapshot = match store::load_snapshot(paths, category) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(%category, error = %e, "cannot read snapshot");
                let reason = e.source().map_or_else(|| e.to_string(), |s| s.to_string());
                out.push(CategoryStatus {
                    category,
                    lines: None,
                    updated,
                    installed: Installed::Unknown,
                    unreadable: Some(reason),
                });
                continue;
            }
        };
        let installed = match &current {
            Some(h) => installed_state(h, &snapshot),
            None => Installed::Unknown,
        };
        out.push(CategoryStatus {
            category,
            lines: Some(snapshot.len()),
            updated,
            installed,
            unreadable: None,
        });
    }
    out
}
