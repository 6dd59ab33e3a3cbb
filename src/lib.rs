//! Blockhosts - merge categorized block lists into the system hosts file.

pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod hosts;
pub mod lines;
pub mod merge;
pub mod platform;
pub mod status;
pub mod store;
pub mod update;

pub use error::{Error, Result};
