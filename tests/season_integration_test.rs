use anyhow::Result;
use chrono::NaiveDate;
use season_metrics::core::ConfigProvider;
use season_metrics::{
    geo_distance, Conference, CoordinateUnit, Division, LocalStorage, Location, MetricsEngine,
    SeasonConfig, SeasonError, SeasonLoader,
};
use tempfile::TempDir;

const TEAMS: &str = "\
Lakers,Western,Pacific,34.0,-118.2
Celtics,Eastern,Atlantic,42.3,-71.0
";

fn write_season(dir: &TempDir, teams: &str, schedule: &str) -> Result<()> {
    std::fs::write(dir.path().join("teams.csv"), teams)?;
    std::fs::write(dir.path().join("schedule.csv"), schedule)?;
    Ok(())
}

fn config(unit: &str, report: Option<&str>) -> Result<SeasonConfig> {
    let output = match report {
        Some(path) => format!("[output]\nreport_path = \"{}\"\n", path),
        None => String::new(),
    };
    let content = format!(
        r#"
[season]
name = "integration"

[source]
teams_path = "teams.csv"
schedule_path = "schedule.csv"
coordinate_unit = "{}"

{}"#,
        unit, output
    );
    Ok(SeasonConfig::from_toml_str(&content)?)
}

fn storage(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().to_str().unwrap().to_string())
}

#[test]
fn test_lakers_celtics_single_fixture() -> Result<()> {
    let dir = TempDir::new()?;
    write_season(&dir, TEAMS, "01-11-2023,Lakers,Celtics\n")?;

    let season = SeasonLoader::new(storage(&dir), config("degrees", None)?).load()?;
    let registry = &season.registry;
    let nov_1 = NaiveDate::from_ymd_opt(2023, 11, 1).unwrap();

    let lakers_id = registry.id_of("Lakers").unwrap();
    let celtics_id = registry.id_of("Celtics").unwrap();
    let lakers = registry.get(lakers_id).unwrap();
    let celtics = registry.get(celtics_id).unwrap();

    assert_eq!(lakers.schedule.len(), 1);
    assert_eq!(lakers.schedule[0].date, nov_1);
    assert_eq!(lakers.schedule[0].opponent, celtics_id);
    assert!(lakers.schedule[0].is_home);

    assert_eq!(celtics.schedule.len(), 1);
    assert_eq!(celtics.schedule[0].date, nov_1);
    assert_eq!(celtics.schedule[0].opponent, lakers_id);
    assert!(!celtics.schedule[0].is_home);

    assert_eq!(season.calendar.dates().collect::<Vec<_>>(), vec![nov_1]);

    let there = season.distances.get("Lakers", "Celtics").unwrap();
    let back = season.distances.get("Celtics", "Lakers").unwrap();
    assert_eq!(there, back);
    assert!(there > 2000.0 && there < 3500.0, "got {}", there);
    assert_eq!(season.distances.get("Lakers", "Lakers"), Some(0.0));
    assert_eq!(season.distances.get("Celtics", "Celtics"), Some(0.0));

    assert_eq!(registry.conference(Conference::Western), &[lakers_id]);
    assert_eq!(registry.division(Division::Atlantic), &[celtics_id]);
    Ok(())
}

#[test]
fn test_degree_coordinates_are_converted_before_distance() -> Result<()> {
    let dir = TempDir::new()?;
    write_season(&dir, TEAMS, "01-11-2023,Lakers,Celtics\n")?;

    let in_degrees = SeasonLoader::new(storage(&dir), config("degrees", None)?).load()?;
    let lakers = in_degrees.registry.by_name("Lakers").unwrap();
    assert!((lakers.location.lat - 34.0_f64.to_radians()).abs() < 1e-12);

    let expected = geo_distance(
        Location::from_degrees(34.0, -118.2),
        Location::from_degrees(42.3, -71.0),
    );
    assert!((in_degrees.distances.get("Lakers", "Celtics").unwrap() - expected).abs() < 1e-9);

    // 同一份資料若當成弧度讀，距離就完全不同
    let as_radians = SeasonLoader::new(storage(&dir), config("radians", None)?).load()?;
    let wrong = as_radians.distances.get("Lakers", "Celtics").unwrap();
    assert!((wrong - expected).abs() > 100.0);
    Ok(())
}

#[test]
fn test_malformed_date_fails_whole_load() -> Result<()> {
    let dir = TempDir::new()?;
    write_season(
        &dir,
        TEAMS,
        "01-11-2023,Lakers,Celtics\n2-11-2023,Celtics,Lakers\n03-11-2023,Lakers,Celtics\n",
    )?;

    let err = SeasonLoader::new(storage(&dir), config("degrees", None)?)
        .load()
        .unwrap_err();
    match err {
        SeasonError::MalformedDate { value, line } => {
            assert_eq!(value, "2-11-2023");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unknown_team_in_schedule() -> Result<()> {
    let dir = TempDir::new()?;
    write_season(&dir, TEAMS, "01-11-2023,Lakers,Knicks\n")?;

    let err = SeasonLoader::new(storage(&dir), config("degrees", None)?)
        .load()
        .unwrap_err();
    assert!(matches!(err, SeasonError::UnknownTeam { ref name, line: 1 } if name == "Knicks"));
    Ok(())
}

#[test]
fn test_engine_writes_report_to_data_dir() -> Result<()> {
    let dir = TempDir::new()?;
    let teams = format!("{}Bulls,Eastern,Central,41.9,-87.7\n", TEAMS);
    let schedule = "\
01-11-2023,Lakers,Celtics
02-11-2023,Bulls,Lakers
03-11-2023,Celtics,Bulls
05-11-2023,Lakers,Bulls
";
    write_season(&dir, &teams, schedule)?;

    let config = config("degrees", Some("out/report.json"))?;
    assert_eq!(config.report_path(), Some("out/report.json"));
    let run = MetricsEngine::new(SeasonLoader::new(storage(&dir), config)).run()?;

    assert_eq!(run.report.teams, 3);
    assert_eq!(run.report.fixtures, 4);
    assert_eq!(run.report.calendar_days, 4);
    // Lakers 1-2, Celtics none (1, 3), Bulls 2-3
    assert_eq!(run.report.total_back_to_backs, 2);
    assert_eq!(
        run.report.first_date,
        NaiveDate::from_ymd_opt(2023, 11, 1)
    );

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("out/report.json"))?)?;
    assert_eq!(json["season"], "integration");
    assert_eq!(json["team_summaries"].as_array().unwrap().len(), 3);
    assert_eq!(json["team_summaries"][0]["name"], "Lakers");
    assert_eq!(json["team_summaries"][0]["home_games"], 2);
    Ok(())
}

#[test]
fn test_unit_parsing_matches_config_names() {
    assert_eq!("degrees".parse::<CoordinateUnit>(), Ok(CoordinateUnit::Degrees));
    assert_eq!("radians".parse::<CoordinateUnit>(), Ok(CoordinateUnit::Radians));
}
