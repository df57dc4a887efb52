use crate::core::distance::DistanceMatrix;
use crate::core::ingest::{build_calendar, load_fixtures, load_teams, read_fixture_records};
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{Calendar, TeamRegistry};
use crate::utils::error::Result;

/// Everything the optimizer reads for one season.
#[derive(Debug, Clone)]
pub struct Season {
    pub registry: TeamRegistry,
    pub calendar: Calendar,
    pub distances: DistanceMatrix,
    pub fixtures: usize,
}

pub struct SeasonLoader<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SeasonLoader<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Teams first, then fixtures against the finished registry.
    pub fn load(&self) -> Result<Season> {
        tracing::debug!("Reading teams from: {}", self.config.teams_path());
        let teams = self.storage.read_file(self.config.teams_path())?;
        let mut registry = load_teams(teams.as_slice(), self.config.coordinate_unit())?;
        tracing::info!("Loaded {} teams", registry.len());

        tracing::debug!("Reading schedule from: {}", self.config.schedule_path());
        let schedule = self.storage.read_file(self.config.schedule_path())?;
        let records = read_fixture_records(schedule.as_slice())?;
        let fixtures = load_fixtures(&mut registry, &records)?;
        let calendar = build_calendar(&records)?;
        tracing::info!("Loaded {} fixtures over {} dates", fixtures, calendar.len());

        let distances = DistanceMatrix::build(&registry);

        Ok(Season {
            registry,
            calendar,
            distances,
            fixtures,
        })
    }
}
