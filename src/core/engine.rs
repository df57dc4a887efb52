use crate::core::report::SeasonReport;
use crate::core::season::{Season, SeasonLoader};
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::time::Instant;

pub struct MetricsRun {
    pub season: Season,
    pub report: SeasonReport,
    pub output_path: Option<String>,
}

pub struct MetricsEngine<S: Storage, C: ConfigProvider> {
    loader: SeasonLoader<S, C>,
}

impl<S: Storage, C: ConfigProvider> MetricsEngine<S, C> {
    pub fn new(loader: SeasonLoader<S, C>) -> Self {
        Self { loader }
    }

    pub fn run(&self) -> Result<MetricsRun> {
        let started = Instant::now();
        let config = self.loader.config();
        tracing::info!("Starting season load: {}", config.season_name());

        // Load
        let season = self.loader.load()?;

        // Metrics
        let report = SeasonReport::from_season(config.season_name(), &season);
        tracing::info!(
            "Season metrics: {} back-to-backs, std-dev {:?}",
            report.total_back_to_backs,
            report.back_to_back_std_dev
        );

        // Report
        let output_path = match config.report_path() {
            Some(path) => {
                let json = report.to_json(config.pretty_report())?;
                tracing::debug!("Writing report ({} bytes) to storage", json.len());
                self.loader.storage().write_file(path, json.as_bytes())?;
                Some(path.to_string())
            }
            None => None,
        };

        tracing::info!("Season processed in {:?}", started.elapsed());
        Ok(MetricsRun {
            season,
            report,
            output_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CoordinateUnit;
    use crate::utils::error::SeasonError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with(files: &[(&str, &str)]) -> Self {
            let storage = Self::default();
            {
                let mut map = storage.files.lock().unwrap();
                for (path, content) in files {
                    map.insert(path.to_string(), content.as_bytes().to_vec());
                }
            }
            storage
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                SeasonError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().unwrap().insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        report_path: Option<String>,
    }

    impl ConfigProvider for MockConfig {
        fn season_name(&self) -> &str {
            "test-season"
        }

        fn teams_path(&self) -> &str {
            "teams.csv"
        }

        fn schedule_path(&self) -> &str {
            "schedule.csv"
        }

        fn coordinate_unit(&self) -> CoordinateUnit {
            CoordinateUnit::Degrees
        }

        fn report_path(&self) -> Option<&str> {
            self.report_path.as_deref()
        }
    }

    const TEAMS: &str = "Lakers,Western,Pacific,34.0,-118.2\nCeltics,Eastern,Atlantic,42.3,-71.0\n";
    const SCHEDULE: &str = "01-11-2023,Lakers,Celtics\n02-11-2023,Celtics,Lakers\n";

    #[test]
    fn test_run_builds_report_and_writes_it() {
        let storage = MockStorage::with(&[("teams.csv", TEAMS), ("schedule.csv", SCHEDULE)]);
        let config = MockConfig {
            report_path: Some("out/report.json".to_string()),
        };
        let engine = MetricsEngine::new(SeasonLoader::new(storage.clone(), config));

        let run = engine.run().unwrap();
        assert_eq!(run.report.season, "test-season");
        assert_eq!(run.report.teams, 2);
        assert_eq!(run.report.fixtures, 2);
        assert_eq!(run.report.calendar_days, 2);
        assert_eq!(run.report.total_back_to_backs, 2);
        assert_eq!(run.report.back_to_back_std_dev, Some(0.0));
        assert_eq!(run.output_path.as_deref(), Some("out/report.json"));

        let written = storage.get_file("out/report.json").unwrap();
        let parsed: SeasonReport = serde_json::from_slice(&written).unwrap();
        assert_eq!(parsed.teams, 2);
        assert_eq!(parsed.total_back_to_backs, run.report.total_back_to_backs);
        let names: Vec<_> = parsed.team_summaries.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Lakers", "Celtics"]);
    }

    #[test]
    fn test_run_without_report_path_writes_nothing() {
        let storage = MockStorage::with(&[("teams.csv", TEAMS), ("schedule.csv", SCHEDULE)]);
        let config = MockConfig { report_path: None };
        let engine = MetricsEngine::new(SeasonLoader::new(storage.clone(), config));

        let run = engine.run().unwrap();
        assert!(run.output_path.is_none());
        assert_eq!(storage.files.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_schedule_file_is_io_error() {
        let storage = MockStorage::with(&[("teams.csv", TEAMS)]);
        let config = MockConfig { report_path: None };
        let engine = MetricsEngine::new(SeasonLoader::new(storage, config));

        assert!(matches!(engine.run(), Err(SeasonError::IoError(_))));
    }
}
