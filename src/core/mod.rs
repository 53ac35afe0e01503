pub mod answer;
pub mod filter;
pub mod router;
pub mod sheet;

pub use crate::domain::model::{QueryIntent, Record, Snapshot};
pub use crate::utils::error::Result;
pub use router::QueryRouter;
