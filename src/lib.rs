pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::BotConfig;
pub use core::fetch::HttpFetcher;
pub use domain::model::{OutgoingMessage, ReportKind};
pub use utils::error::{BotError, Result};
