use crate::core::ConfigProvider;
use crate::domain::model::CoordinateUnit;
use crate::utils::error::{Result, SeasonError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonConfig {
    pub season: SeasonInfo,
    pub source: SourceConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub teams_path: String,
    pub schedule_path: String,
    #[serde(default)]
    pub coordinate_unit: CoordinateUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report_path: Option<String>,
    pub pretty: Option<bool>,
}

impl SeasonConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SeasonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeasonError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("season.name", &self.season.name)?;
        validation::validate_path("source.teams_path", &self.source.teams_path)?;
        validation::validate_path("source.schedule_path", &self.source.schedule_path)?;

        if let Some(path) = self.output.as_ref().and_then(|o| o.report_path.as_deref()) {
            validation::validate_path("output.report_path", path)?;
            validation::validate_file_extensions("output.report_path", &[path], &["json"])?;
        }

        Ok(())
    }
}

impl ConfigProvider for SeasonConfig {
    fn season_name(&self) -> &str {
        &self.season.name
    }

    fn teams_path(&self) -> &str {
        &self.source.teams_path
    }

    fn schedule_path(&self) -> &str {
        &self.source.schedule_path
    }

    fn coordinate_unit(&self) -> CoordinateUnit {
        self.source.coordinate_unit
    }

    fn report_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.report_path.as_deref())
    }

    fn pretty_report(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(true)
    }
}

impl Validate for SeasonConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
