pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{AppsScriptEndpoint, CsvSheetSource, OpenAiModel};
pub use crate::config::GatewayConfig;
pub use crate::core::QueryRouter;
pub use crate::domain::model::{Comparison, FilterQuery, QueryIntent, Record, Snapshot};
pub use crate::utils::error::{GatewayError, Result};
