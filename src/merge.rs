//! Install and remove a block list against hosts content.

use crate::lines::{Duplicates, LineSet};

/// Union of `hosts` and `block` (hosts order first, new block lines after), minus any
/// line matching `whitelist`.
pub fn install(mut hosts: LineSet, block: &LineSet, whitelist: &[String]) -> LineSet {
    hosts.add_all(block.iter(), Duplicates::Skip);
    if whitelist.is_empty() {
        return hosts;
    }
    hosts.remove_all(whitelist)
}

/// `hosts` without any line present in `block`.
pub fn remove(hosts: &LineSet, block: &LineSet) -> LineSet {
    hosts.remove_all(block.iter())
}

/// Split a `--whitelist` argument into literal lines.
///
/// Entries are comma separated and trimmed; empty entries are dropped, so
/// `"0.0.0.0 a.com, 0.0.0.0 b.com"` yields two whole hosts lines.
pub fn parse_whitelist<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|a| a.as_ref().split(','))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
