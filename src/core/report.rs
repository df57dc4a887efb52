use crate::core::metrics::{standard_deviation, total_back_to_backs, travel_miles};
use crate::core::season::Season;
use crate::domain::model::{Conference, Division};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub name: String,
    pub conference: Conference,
    pub division: Division,
    pub games: usize,
    pub home_games: usize,
    pub back_to_backs: u32,
    pub travel_miles: f64,
}

/// Scalar quality signals for one loaded season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonReport {
    pub season: String,
    pub teams: usize,
    pub fixtures: usize,
    pub calendar_days: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub total_back_to_backs: u32,
    pub back_to_back_std_dev: Option<f64>,
    pub travel_std_dev: Option<f64>,
    pub team_summaries: Vec<TeamSummary>,
}

impl SeasonReport {
    pub fn from_season(name: &str, season: &Season) -> Self {
        let team_summaries: Vec<TeamSummary> = season
            .registry
            .iter()
            .map(|(id, team)| TeamSummary {
                name: team.name.clone(),
                conference: team.conference,
                division: team.division,
                games: team.schedule.len(),
                home_games: team.home_games(),
                back_to_backs: team.back_to_backs(),
                travel_miles: travel_miles(&season.registry, &season.distances, id),
            })
            .collect();

        let b2b: Vec<f64> = team_summaries.iter().map(|t| t.back_to_backs as f64).collect();
        let travel: Vec<f64> = team_summaries.iter().map(|t| t.travel_miles).collect();

        Self {
            season: name.to_string(),
            teams: season.registry.len(),
            fixtures: season.fixtures,
            calendar_days: season.calendar.len(),
            first_date: season.calendar.first(),
            last_date: season.calendar.last(),
            total_back_to_backs: total_back_to_backs(&season.registry),
            back_to_back_std_dev: standard_deviation(&b2b),
            travel_std_dev: standard_deviation(&travel),
            team_summaries,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
