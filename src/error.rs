//! Error types for list, hosts and refresh operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Install/remove referenced a category that was never refreshed.
    #[error(
        "no data for category '{category}' at {}; run 'blockhosts --update' first",
        path.display()
    )]
    MissingCategory { category: Category, path: PathBuf },

    #[error("hosts file {} is not accessible ({hint})", path.display())]
    HostsInaccessible {
        path: PathBuf,
        hint: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fetch {category} from {url}")]
    Fetch {
        category: Category,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("list for {category} from {url} is not valid UTF-8")]
    Decode {
        category: Category,
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("fetch {category} from {url}: HTTP {status}")]
    Status {
        category: Category,
        url: String,
        status: u16,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
