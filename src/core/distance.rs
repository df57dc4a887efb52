use crate::core::geo::geo_distance;
use crate::domain::model::TeamRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Miles between every pair of registered teams, keyed by team name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    miles: BTreeMap<String, BTreeMap<String, f64>>,
}

impl DistanceMatrix {
    pub fn build(registry: &TeamRegistry) -> Self {
        let mut miles: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

        for (_, from) in registry.iter() {
            let row = miles.entry(from.name.clone()).or_default();
            for (_, to) in registry.iter() {
                let d = if from.name == to.name {
                    0.0
                } else {
                    geo_distance(from.location, to.location)
                };
                row.insert(to.name.clone(), d);
            }
        }

        tracing::debug!("Built distance matrix for {} teams", miles.len());
        Self { miles }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.miles.get(from).and_then(|row| row.get(to)).copied()
    }

    pub fn row(&self, from: &str) -> Option<&BTreeMap<String, f64>> {
        self.miles.get(from)
    }

    pub fn len(&self) -> usize {
        self.miles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.miles.is_empty()
    }
}
