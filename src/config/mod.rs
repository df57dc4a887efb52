pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::CoordinateUnit;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_required_field;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::{OutputConfig, SeasonConfig, SeasonInfo, SourceConfig};

#[cfg(feature = "cli")]
const DEFAULT_SEASON_NAME: &str = "season";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "season-metrics")]
#[command(about = "Distance and rest metrics for a league season schedule")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the data paths are relative to
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    /// Teams CSV: name,conference,division,latitude,longitude
    #[arg(long)]
    pub teams: Option<String>,

    /// Schedule CSV: DD-MM-YYYY,home,away
    #[arg(long)]
    pub schedule: Option<String>,

    /// Unit of the team coordinates (degrees or radians)
    #[arg(long)]
    pub unit: Option<CoordinateUnit>,

    /// Season label in the report (defaults to "season" without --config)
    #[arg(long)]
    pub season_name: Option<String>,

    /// Write the JSON report to this path (relative to the data dir)
    #[arg(long)]
    pub report: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// TOML 設定為底，命令列參數覆蓋
    pub fn resolve(&self) -> Result<SeasonConfig> {
        let mut config = match &self.config {
            Some(path) => SeasonConfig::from_file(path)?,
            None => SeasonConfig {
                season: SeasonInfo {
                    name: DEFAULT_SEASON_NAME.to_string(),
                    description: None,
                },
                source: SourceConfig {
                    teams_path: validate_required_field("teams", &self.teams)?.clone(),
                    schedule_path: validate_required_field("schedule", &self.schedule)?.clone(),
                    coordinate_unit: CoordinateUnit::default(),
                },
                output: None,
            },
        };

        if let Some(name) = &self.season_name {
            config.season.name = name.clone();
        }
        if let Some(teams) = &self.teams {
            config.source.teams_path = teams.clone();
        }
        if let Some(schedule) = &self.schedule {
            config.source.schedule_path = schedule.clone();
        }
        if let Some(unit) = self.unit {
            config.source.coordinate_unit = unit;
        }
        if let Some(report) = &self.report {
            let output = config.output.get_or_insert(OutputConfig {
                report_path: None,
                pretty: None,
            });
            output.report_path = Some(report.clone());
        }

        Ok(config)
    }
}
