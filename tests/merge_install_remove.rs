//! Install/remove examples and whitelist handling.

mod common;

use blockhosts::lines::LineSet;
use blockhosts::merge;
use common::lines;

fn hosts() -> LineSet {
    LineSet::from_lines(["127.0.0.1 localhost"])
}

fn block() -> LineSet {
    LineSet::from_lines(["0.0.0.0 ads.example.com", "0.0.0.0 track.example.com"])
}

#[test]
fn install_without_whitelist_appends_block_lines() {
    let out = merge::install(hosts(), &block(), &[]);
    assert_eq!(
        out.as_slice(),
        [
            "127.0.0.1 localhost",
            "0.0.0.0 ads.example.com",
            "0.0.0.0 track.example.com"
        ]
    );
}

#[test]
fn install_excludes_whitelisted_lines() {
    let out = merge::install(hosts(), &block(), &lines(&["0.0.0.0 track.example.com"]));
    assert_eq!(
        out.as_slice(),
        ["127.0.0.1 localhost", "0.0.0.0 ads.example.com"]
    );
}

#[test]
fn whitelist_also_strips_existing_hosts_lines() {
    let h = LineSet::from_lines(["127.0.0.1 localhost", "0.0.0.0 mine.example.com"]);
    let out = merge::install(h, &block(), &lines(&["0.0.0.0 mine.example.com"]));
    assert!(!out.contains("0.0.0.0 mine.example.com"));
    assert!(out.contains("127.0.0.1 localhost"));
}

#[test]
fn reinstall_does_not_reappend() {
    let once = merge::install(hosts(), &block(), &[]);
    let twice = merge::install(once.clone(), &block(), &[]);
    assert_eq!(once, twice);
}

#[test]
fn remove_subtracts() {
    let h = LineSet::from_lines(["a", "b", "c"]);
    let out = merge::remove(&h, &LineSet::from_lines(["b"]));
    assert_eq!(out.as_slice(), ["a", "c"]);
}

#[test]
fn remove_leaves_other_categories_alone() {
    let social = LineSet::from_lines(["0.0.0.0 facebook.com"]);
    let gambling = LineSet::from_lines(["0.0.0.0 casino.example"]);
    let h = merge::install(hosts(), &social, &[]);
    let h = merge::install(h, &gambling, &[]);
    let out = merge::remove(&h, &social);
    assert_eq!(
        out.as_slice(),
        ["127.0.0.1 localhost", "0.0.0.0 casino.example"]
    );
}

#[test]
fn whitelist_parsing_splits_on_commas() {
    let parsed = merge::parse_whitelist(&[
        "0.0.0.0 www.linkedin.com, 0.0.0.0 www.twitter.com,",
        "0.0.0.0 x.com",
    ]);
    assert_eq!(
        parsed,
        lines(&[
            "0.0.0.0 www.linkedin.com",
            "0.0.0.0 www.twitter.com",
            "0.0.0.0 x.com"
        ])
    );
    assert!(merge::parse_whitelist::<&str>(&[]).is_empty());
}
