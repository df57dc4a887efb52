use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conference {
    Western,
    Eastern,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::Western, Conference::Eastern];

    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::Western => "Western",
            Conference::Eastern => "Eastern",
        }
    }
}

impl FromStr for Conference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Conference::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown conference '{}'", s))
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Southwest,
    Northwest,
    Pacific,
}

impl Division {
    pub const ALL: [Division; 6] = [
        Division::Atlantic,
        Division::Central,
        Division::Southeast,
        Division::Southwest,
        Division::Northwest,
        Division::Pacific,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Atlantic => "Atlantic",
            Division::Central => "Central",
            Division::Southeast => "Southeast",
            Division::Southwest => "Southwest",
            Division::Northwest => "Northwest",
            Division::Pacific => "Pacific",
        }
    }
}

impl FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Division::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown division '{}'", s))
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit the team source writes its coordinates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateUnit {
    #[default]
    Degrees,
    Radians,
}

impl CoordinateUnit {
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            CoordinateUnit::Degrees => value.to_radians(),
            CoordinateUnit::Radians => value,
        }
    }
}

impl FromStr for CoordinateUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrees" | "deg" => Ok(CoordinateUnit::Degrees),
            "radians" | "rad" => Ok(CoordinateUnit::Radians),
            other => Err(format!("unknown coordinate unit '{}'", other)),
        }
    }
}

/// A venue position. Both fields are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn from_radians(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.to_radians(),
            lng: lng.to_radians(),
        }
    }
}

/// Stable handle of a team inside its [`TeamRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub usize);

/// One fixture seen from one team's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub date: NaiveDate,
    pub opponent: TeamId,
    pub is_home: bool,
}

impl Game {
    pub fn new(date: NaiveDate, opponent: TeamId, is_home: bool) -> Self {
        Self {
            date,
            opponent,
            is_home,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub conference: Conference,
    pub division: Division,
    pub location: Location,
    pub schedule: Vec<Game>,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        conference: Conference,
        division: Division,
        location: Location,
    ) -> Self {
        Self {
            name: name.into(),
            conference,
            division,
            location,
            schedule: Vec::new(),
        }
    }

    /// Number of adjacent games, in date order, played on consecutive days.
    pub fn back_to_backs(&self) -> u32 {
        let mut dates: Vec<NaiveDate> = self.schedule.iter().map(|g| g.date).collect();
        dates.sort();
        dates
            .windows(2)
            .filter(|pair| (pair[1] - pair[0]).num_days() == 1)
            .count() as u32
    }

    pub fn home_games(&self) -> usize {
        self.schedule.iter().filter(|g| g.is_home).count()
    }

    pub fn sort_schedule(&mut self) {
        self.schedule.sort_by_key(|g| g.date);
    }
}

/// Owns every team of a season plus the conference and division groupings.
#[derive(Debug, Clone)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    by_name: HashMap<String, TeamId>,
    conferences: BTreeMap<Conference, Vec<TeamId>>,
    divisions: BTreeMap<Division, Vec<TeamId>>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self {
            teams: Vec::new(),
            by_name: HashMap::new(),
            conferences: Conference::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
            divisions: Division::ALL.into_iter().map(|d| (d, Vec::new())).collect(),
        }
    }

    /// Registers a team. Returns `None` if the name is already taken.
    pub fn insert(&mut self, team: Team) -> Option<TeamId> {
        if self.by_name.contains_key(&team.name) {
            return None;
        }
        let id = TeamId(self.teams.len());
        self.by_name.insert(team.name.clone(), id);
        self.conferences.entry(team.conference).or_default().push(id);
        self.divisions.entry(team.division).or_default().push(id);
        self.teams.push(team);
        Some(id)
    }

    pub fn id_of(&self, name: &str) -> Option<TeamId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    pub fn get_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(id.0)
    }

    pub fn by_name(&self, name: &str) -> Option<&Team> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    pub fn name_of(&self, id: TeamId) -> Option<&str> {
        self.get(id).map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Teams in load order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(i, t)| (TeamId(i), t))
    }

    pub fn conference(&self, conference: Conference) -> &[TeamId] {
        self.conferences.get(&conference).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn division(&self, division: Division) -> &[TeamId] {
        self.divisions.get(&division).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn conferences(&self) -> &BTreeMap<Conference, Vec<TeamId>> {
        &self.conferences
    }

    pub fn divisions(&self) -> &BTreeMap<Division, Vec<TeamId>> {
        &self.divisions
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Every playing date of a season. The flag belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    days: BTreeMap<NaiveDate, bool>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `date` with a `false` flag. Existing entries are left alone.
    pub fn insert(&mut self, date: NaiveDate) {
        self.days.entry(date).or_insert(false);
    }

    pub fn mark(&mut self, date: NaiveDate, flag: bool) -> bool {
        match self.days.get_mut(&date) {
            Some(slot) => {
                *slot = flag;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<bool> {
        self.days.get(&date).copied()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// A parsed row of the team source.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub line: u64,
    pub name: String,
    pub conference: Conference,
    pub division: Division,
    pub location: Location,
}

/// A row of the fixture source. The date stays raw until the fixture is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureRecord {
    pub line: u64,
    pub date: String,
    pub home: String,
    pub away: String,
}
