use crate::core::distance::DistanceMatrix;
use crate::domain::model::{Game, TeamId, TeamRegistry};
use rand::Rng;

/// League-wide sum of every team's back-to-back count.
pub fn total_back_to_backs(registry: &TeamRegistry) -> u32 {
    registry.iter().map(|(_, team)| team.back_to_backs()).sum()
}

/// Population standard deviation. `None` for an empty series.
pub fn standard_deviation(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt())
}

/// `true` with probability `p`, drawn from the thread-local generator.
pub fn flip_coin(p: f64) -> bool {
    flip_coin_with(&mut rand::thread_rng(), p)
}

pub fn flip_coin_with<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Copy of `schedule` ordered by date. Games on the same date keep their order.
pub fn sort_schedule(schedule: &[Game]) -> Vec<Game> {
    let mut sorted = schedule.to_vec();
    sorted.sort_by_key(|game| game.date);
    sorted
}

/// Miles a team covers over its season, starting from its own venue and
/// moving to each game's home venue in date order.
pub fn travel_miles(registry: &TeamRegistry, distances: &DistanceMatrix, team: TeamId) -> f64 {
    let Some(me) = registry.get(team) else {
        return 0.0;
    };

    let mut here = me.name.as_str();
    let mut total = 0.0;

    for game in sort_schedule(&me.schedule) {
        let venue = if game.is_home {
            me.name.as_str()
        } else {
            match registry.name_of(game.opponent) {
                Some(name) => name,
                None => continue,
            }
        };
        total += distances.get(here, venue).unwrap_or(0.0);
        here = venue;
    }

    total
}
