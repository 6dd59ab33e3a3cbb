//! Block-list categories.

use clap::ValueEnum;
use std::fmt;

/// Extension of per-category snapshot files.
pub const SNAPSHOT_EXTENSION: &str = "txt";

/// Every category: the five base lists and their combinations.
///
/// Each one already includes `master` (adware and malware).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Category {
    Master,
    Fakenews,
    Gambling,
    Porn,
    Social,
    FakenewsGambling,
    FakenewsPorn,
    FakenewsSocial,
    GamblingPorn,
    GamblingSocial,
    PornSocial,
    FakenewsGamblingPorn,
    FakenewsGamblingSocial,
    FakenewsPornSocial,
    GamblingPornSocial,
    FakenewsGamblingPornSocial,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Master,
        Category::Fakenews,
        Category::Gambling,
        Category::Porn,
        Category::Social,
        Category::FakenewsGambling,
        Category::FakenewsPorn,
        Category::FakenewsSocial,
        Category::GamblingPorn,
        Category::GamblingSocial,
        Category::PornSocial,
        Category::FakenewsGamblingPorn,
        Category::FakenewsGamblingSocial,
        Category::FakenewsPornSocial,
        Category::GamblingPornSocial,
        Category::FakenewsGamblingPornSocial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Master => "master",
            Category::Fakenews => "fakenews",
            Category::Gambling => "gambling",
            Category::Porn => "porn",
            Category::Social => "social",
            Category::FakenewsGambling => "fakenews-gambling",
            Category::FakenewsPorn => "fakenews-porn",
            Category::FakenewsSocial => "fakenews-social",
            Category::GamblingPorn => "gambling-porn",
            Category::GamblingSocial => "gambling-social",
            Category::PornSocial => "porn-social",
            Category::FakenewsGamblingPorn => "fakenews-gambling-porn",
            Category::FakenewsGamblingSocial => "fakenews-gambling-social",
            Category::FakenewsPornSocial => "fakenews-porn-social",
            Category::GamblingPornSocial => "gambling-porn-social",
            Category::FakenewsGamblingPornSocial => "fakenews-gambling-porn-social",
        }
    }

    /// Look up a category by its hyphenated name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Snapshot file name, e.g. `social.txt`.
    pub fn file_name(self) -> String {
        format!("{}.{SNAPSHOT_EXTENSION}", self.name())
    }

    /// Path of this category's list relative to the source base URL.
    pub fn source_path(self) -> String {
        match self {
            Category::Master => "hosts".to_string(),
            other => format!("alternates/{}/hosts", other.name()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
