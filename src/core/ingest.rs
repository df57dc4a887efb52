use crate::domain::model::{
    Calendar, Conference, CoordinateUnit, Division, FixtureRecord, Game, Location, Team,
    TeamRecord, TeamRegistry,
};
use crate::utils::error::{Result, SeasonError};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn required_field<'r>(
    record: &'r StringRecord,
    index: usize,
    field: &str,
    line: u64,
) -> Result<&'r str> {
    record
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| SeasonError::MalformedRecord {
            line,
            reason: format!("missing {}", field),
        })
}

fn coordinate(record: &StringRecord, index: usize, field: &str, line: u64) -> Result<f64> {
    let raw = required_field(record, index, field, line)?;
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SeasonError::MalformedRecord {
            line,
            reason: format!("{} '{}' is not a number", field, raw),
        }),
    }
}

/// Reads `name, conference, division, latitude, longitude` rows.
/// Coordinates are converted from `unit` to radians here.
pub fn read_team_records<R: Read>(reader: R, unit: CoordinateUnit) -> Result<Vec<TeamRecord>> {
    let mut records = Vec::new();

    for row in csv_reader(reader).records() {
        let row = row?;
        let line = line_of(&row);

        let name = required_field(&row, 0, "name", line)?;
        let conference = required_field(&row, 1, "conference", line)?
            .parse::<Conference>()
            .map_err(|reason| SeasonError::MalformedRecord { line, reason })?;
        let division = required_field(&row, 2, "division", line)?
            .parse::<Division>()
            .map_err(|reason| SeasonError::MalformedRecord { line, reason })?;
        let lat = coordinate(&row, 3, "latitude", line)?;
        let lng = coordinate(&row, 4, "longitude", line)?;

        records.push(TeamRecord {
            line,
            name: name.to_string(),
            conference,
            division,
            location: Location::from_radians(unit.to_radians(lat), unit.to_radians(lng)),
        });
    }

    tracing::debug!("Read {} team records", records.len());
    Ok(records)
}

pub fn build_registry(records: Vec<TeamRecord>) -> Result<TeamRegistry> {
    let mut registry = TeamRegistry::new();

    for record in records {
        let team = Team::new(record.name, record.conference, record.division, record.location);
        let name = team.name.clone();
        if registry.insert(team).is_none() {
            return Err(SeasonError::DuplicateKey {
                name,
                line: record.line,
            });
        }
    }

    Ok(registry)
}

pub fn load_teams<R: Read>(reader: R, unit: CoordinateUnit) -> Result<TeamRegistry> {
    build_registry(read_team_records(reader, unit)?)
}

/// Reads `date, home, away` rows without interpreting them.
pub fn read_fixture_records<R: Read>(reader: R) -> Result<Vec<FixtureRecord>> {
    let mut records = Vec::new();

    for row in csv_reader(reader).records() {
        let row = row?;
        let line = line_of(&row);

        records.push(FixtureRecord {
            line,
            date: required_field(&row, 0, "date", line)?.to_string(),
            home: required_field(&row, 1, "home team", line)?.to_string(),
            away: required_field(&row, 2, "away team", line)?.to_string(),
        });
    }

    tracing::debug!("Read {} fixture records", records.len());
    Ok(records)
}

/// Parses a fixed-width `DD-MM-YYYY` date. Separators are positional and not checked.
pub fn parse_fixture_date(value: &str, line: u64) -> Result<NaiveDate> {
    let malformed = || SeasonError::MalformedDate {
        value: value.to_string(),
        line,
    };

    if value.len() != 10 || !value.is_ascii() {
        return Err(malformed());
    }

    let number = |range: std::ops::Range<usize>| -> Option<u32> {
        let digits = &value[range];
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            digits.parse().ok()
        } else {
            None
        }
    };

    let day = number(0..2).ok_or_else(malformed)?;
    let month = number(3..5).ok_or_else(malformed)?;
    let year = number(6..10).ok_or_else(malformed)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(malformed)
}

/// Appends both sides of every fixture to the registry.
///
/// Records are resolved in input order and the first bad one is reported.
/// Nothing is appended unless every record resolves.
pub fn load_fixtures(registry: &mut TeamRegistry, records: &[FixtureRecord]) -> Result<usize> {
    let mut resolved = Vec::with_capacity(records.len());

    for record in records {
        let date = parse_fixture_date(&record.date, record.line)?;
        let home = registry
            .id_of(&record.home)
            .ok_or_else(|| SeasonError::UnknownTeam {
                name: record.home.clone(),
                line: record.line,
            })?;
        let away = registry
            .id_of(&record.away)
            .ok_or_else(|| SeasonError::UnknownTeam {
                name: record.away.clone(),
                line: record.line,
            })?;
        if home == away {
            return Err(SeasonError::MalformedRecord {
                line: record.line,
                reason: format!("'{}' cannot play itself", record.home),
            });
        }
        resolved.push((date, home, away));
    }

    for &(date, home, away) in &resolved {
        if let Some(team) = registry.get_mut(home) {
            team.schedule.push(Game::new(date, away, true));
        }
        if let Some(team) = registry.get_mut(away) {
            team.schedule.push(Game::new(date, home, false));
        }
    }

    tracing::debug!("Appended {} fixtures to team schedules", resolved.len());
    Ok(resolved.len())
}

/// Every distinct fixture date, each flagged `false`.
pub fn build_calendar(records: &[FixtureRecord]) -> Result<Calendar> {
    let mut calendar = Calendar::new();
    for record in records {
        calendar.insert(parse_fixture_date(&record.date, record.line)?);
    }
    Ok(calendar)
}
