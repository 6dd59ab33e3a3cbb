//! Download a remote block list as lines.

use reqwest::Client;

use crate::category::Category;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::lines::LineSet;

/// HTTP client with the configured user agent and timeout.
pub fn client(config: &Config) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .build()
        .map_err(Error::Client)
}

/// GET `url` and split the UTF-8 body into trimmed lines.
pub async fn fetch_lines(client: &Client, category: Category, url: &str) -> Result<LineSet> {
    let fetch_err = |source: reqwest::Error| Error::Fetch {
        category,
        url: url.to_string(),
        source,
    };
    tracing::debug!(%category, url, "fetching");
    let resp = client.get(url).send().await.map_err(fetch_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status {
            category,
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let bytes = resp.bytes().await.map_err(fetch_err)?;
    let body = String::from_utf8(bytes.to_vec()).map_err(|source| Error::Decode {
        category,
        url: url.to_string(),
        source,
    })?;
    Ok(decode(&body))
}

/// One trimmed line per input line.
pub fn decode(body: &str) -> LineSet {
    LineSet::from_lines(body.lines().map(str::trim))
}
