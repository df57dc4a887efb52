pub mod distance;
pub mod engine;
pub mod geo;
pub mod ingest;
pub mod metrics;
pub mod report;
pub mod season;

pub use crate::domain::model::{Calendar, Game, Team, TeamId, TeamRegistry};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
