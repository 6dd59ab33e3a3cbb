//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};
use std::ffi::OsString;

use crate::category::Category;
use crate::config::{Config, DataPaths};
use crate::platform::default_hosts_file;
use crate::{hosts, merge, status, update};

const EXAMPLES: &str = "\
Examples:
  blockhosts --update
  blockhosts --install social --whitelist \"0.0.0.0 www.linkedin.com,0.0.0.0 www.twitter.com\"
  blockhosts --remove social";

#[derive(Parser, Debug)]
#[command(name = "blockhosts", version)]
#[command(about = "Merge categorized block lists into the system hosts file")]
#[command(after_help = EXAMPLES)]
#[command(group(
    ArgGroup::new("operation").args(["update", "install", "remove", "list", "show_config"])
))]
pub struct Cli {
    /// Refresh every category list from its remote source
    #[arg(short, long)]
    pub update: bool,

    /// Merge a category's list into the hosts file
    #[arg(short, long, value_enum, value_name = "CATEGORY")]
    pub install: Option<Category>,

    /// Lines to keep out of the hosts file, comma separated (with --install)
    #[arg(short, long, value_name = "LINES", requires = "install")]
    pub whitelist: Vec<String>,

    /// Strip a category's lines from the hosts file
    #[arg(short, long, value_enum, value_name = "CATEGORY")]
    pub remove: Option<Category>,

    /// Show every category, its list age and whether it is installed
    #[arg(short, long)]
    pub list: bool,

    /// Print the paths and list sources in use
    #[arg(short = 'c', long = "config")]
    pub show_config: bool,
}

/// Map DOS-style switches (`/u`, `/?`, ...) to their long forms.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let long = match arg.to_str() {
                Some("/?") => "--help",
                Some("/u") => "--update",
                Some("/i") => "--install",
                Some("/w") => "--whitelist",
                Some("/r") => "--remove",
                Some("/l") => "--list",
                Some("/c") => "--config",
                _ => return arg,
            };
            OsString::from(long)
        })
        .collect()
}

/// Usage text shown for help and for any unrecognized argument shape.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

fn print_usage() {
    println!("{}", usage());
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Run with explicit arguments (first one is the program name).
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!(error = %e, "unrecognized arguments");
            print_usage();
            return Ok(());
        }
    };

    let paths = DataPaths::default_paths();

    if cli.update {
        cmd_update(&paths)
    } else if let Some(category) = cli.install {
        cmd_install(&paths, category, &cli.whitelist)
    } else if let Some(category) = cli.remove {
        cmd_remove(&paths, category)
    } else if cli.list {
        cmd_list(&paths)
    } else if cli.show_config {
        cmd_config(&paths)
    } else {
        print_usage();
        Ok(())
    }
}

/// `error: cause: cause` on one line.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut s = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        s.push_str(": ");
        s.push_str(&cause.to_string());
        source = cause.source();
    }
    s
}

fn cmd_update(paths: &DataPaths) -> Result<()> {
    let config = Config::load(paths)?;
    let rt = tokio::runtime::Runtime::new()?;
    let report = rt
        .block_on(update::update_all(&config, paths))
        .context("update category lists")?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(n) => println!("Updated {}: {n} lines", outcome.category),
            Err(e) => eprintln!("Failed to update {}: {}", outcome.category, error_chain(e)),
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} categories failed to update", report.outcomes.len());
    }
    Ok(())
}

fn cmd_install(paths: &DataPaths, category: Category, whitelist: &[String]) -> Result<()> {
    let config = Config::load(paths)?;
    let hosts_file = default_hosts_file(&config);
    let whitelist = merge::parse_whitelist(whitelist);
    let change = hosts::install_category(paths, hosts_file.as_ref(), category, &whitelist)
        .with_context(|| format!("install {category}"))?;
    println!(
        "Installed {category} into {} ({} -> {} lines)",
        hosts_file.path().display(),
        change.before,
        change.after
    );
    Ok(())
}

fn cmd_remove(paths: &DataPaths, category: Category) -> Result<()> {
    let config = Config::load(paths)?;
    let hosts_file = default_hosts_file(&config);
    let change = hosts::remove_category(paths, hosts_file.as_ref(), category)
        .with_context(|| format!("remove {category}"))?;
    println!(
        "Removed {category} from {} ({} -> {} lines)",
        hosts_file.path().display(),
        change.before,
        change.after
    );
    Ok(())
}

fn cmd_list(paths: &DataPaths) -> Result<()> {
    let config = Config::load(paths)?;
    let hosts_file = default_hosts_file(&config);
    for s in status::category_statuses(paths, hosts_file.as_ref()) {
        let lines = match (&s.unreadable, s.lines) {
            (Some(e), _) => format!("unreadable ({e})"),
            (None, Some(n)) => n.to_string(),
            (None, None) => "-".to_string(),
        };
        let updated = s
            .updated
            .map_or_else(|| "never".to_string(), |t| t.to_rfc3339());
        println!("{}\t{lines}\t{updated}\t{}", s.category, s.installed.label());
    }
    Ok(())
}

fn cmd_config(paths: &DataPaths) -> Result<()> {
    let config = Config::load(paths)?;
    let hosts_file = default_hosts_file(&config);
    println!("data dir:    {}", paths.data_dir.display());
    println!("config file: {}", paths.config_file.display());
    println!("lists dir:   {}", paths.lists_dir.display());
    println!("hosts file:  {}", hosts_file.path().display());
    let sources = config.sources();
    for category in Category::ALL {
        println!("source:      {category}\t{}", sources.url(category));
    }
    Ok(())
}
