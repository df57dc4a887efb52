pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
pub use config::toml_config::SeasonConfig;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::distance::DistanceMatrix;
pub use crate::core::engine::{MetricsEngine, MetricsRun};
pub use crate::core::geo::{geo_distance, EARTH_RADIUS_MILES};
pub use crate::core::report::{SeasonReport, TeamSummary};
pub use crate::core::season::{Season, SeasonLoader};
pub use domain::model::{
    Calendar, Conference, CoordinateUnit, Division, Game, Location, Team, TeamId, TeamRegistry,
};
pub use utils::error::{Result, SeasonError};
