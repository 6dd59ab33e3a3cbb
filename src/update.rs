//! Refresh every category snapshot from its remote source.
//!
//! Each category is fetched and written on its own: a failure is recorded for that
//! category and the rest still run. A snapshot is only replaced after a complete fetch.

use reqwest::Client;
use tokio::task::JoinSet;

use crate::category::Category;
use crate::config::{Config, DataPaths};
use crate::error::{Error, Result};
use crate::fetch;
use crate::store;

/// Result of refreshing one category: line count written, or why it failed.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: Category,
    pub result: Result<usize>,
}

/// Per-category results of a refresh, in category order.
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub outcomes: Vec<CategoryOutcome>,
}

impl UpdateReport {
    pub fn failures(&self) -> impl Iterator<Item = (Category, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.category, e)))
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

async fn refresh_one(
    client: &Client,
    paths: &DataPaths,
    category: Category,
    url: &str,
) -> Result<usize> {
    let lines = fetch::fetch_lines(client, category, url).await?;
    store::save_snapshot(paths, category, &lines)?;
    Ok(lines.len())
}

fn record(category: Category, result: Result<usize>) -> CategoryOutcome {
    if let Err(e) = &result {
        tracing::warn!(%category, error = %e, "category refresh failed");
    }
    CategoryOutcome { category, result }
}

/// Refresh all categories, sequentially or one task per category per `parallel_update`.
pub async fn update_all(config: &Config, paths: &DataPaths) -> Result<UpdateReport> {
    store::ensure_dirs(paths)?;
    let client = fetch::client(config)?;
    let sources = config.sources();
    let mut report = UpdateReport::default();

    if config.parallel_update {
        let mut tasks = JoinSet::new();
        for (category, url) in sources.iter() {
            let client = client.clone();
            let paths = paths.clone();
            let url = url.to_string();
            tasks.spawn(async move {
                let result = refresh_one(&client, &paths, category, &url).await;
                (category, result)
            });
        }
        while let Some(joined) = tasks.join_next().await {
            let (category, result) =
                joined.unwrap_or_else(|e| std::panic::resume_unwind(e.into_panic()));
            report.outcomes.push(record(category, result));
        }
        report.outcomes.sort_by_key(|o| o.category);
    } else {
        for (category, url) in sources.iter() {
            let result = refresh_one(&client, paths, category, url).await;
            report.outcomes.push(record(category, result));
        }
    }

    Ok(report)
}
