//! Dashboard aggregation over already-loaded lists.
//!
//! Everything here is a pure fold over in-memory records; the dashboard
//! never issues network calls of its own beyond the list fetches.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// One bar of a categorical histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountBucket {
    pub label: String,
    pub count: usize,
}

/// Group records by a categorical field and count occurrences.
///
/// Map-iteration order is not meaningful to a reader, so the result is
/// given an explicit order: count descending, ties by label ascending.
pub fn histogram<T>(records: &[T], key: impl Fn(&T) -> &str) -> Vec<CountBucket> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record).to_string()).or_default() += 1;
    }
    let mut buckets: Vec<CountBucket> = counts
        .into_iter()
        .map(|(label, count)| CountBucket { label, count })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    buckets
}

/// The facts of one trip, extracted from a travel request.
#[derive(Debug, Clone)]
pub struct TripFact {
    pub country: String,
    pub employee: String,
    pub cost: f64,
}

/// Accumulated travel figures for one group key (a country or an employee).
#[derive(Debug, Clone, Serialize)]
pub struct TripRollup {
    pub key: String,
    pub trips: usize,
    /// Distinct secondary keys: employees when grouping by country,
    /// countries when grouping by employee.
    pub participants: BTreeSet<String>,
    pub total_cost: f64,
}

impl TripRollup {
    /// Derived at read time, never stored. An empty group averages to zero
    /// rather than dividing into NaN.
    pub fn average_cost(&self) -> f64 {
        if self.trips == 0 {
            0.0
        } else {
            self.total_cost / self.trips as f64
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// Roll trips up by destination country, collecting distinct travelers.
pub fn rollup_by_country(trips: &[TripFact]) -> Vec<TripRollup> {
    rollup(trips, |t| (&t.country, &t.employee))
}

/// Roll trips up by employee, collecting distinct destination countries.
pub fn rollup_by_employee(trips: &[TripFact]) -> Vec<TripRollup> {
    rollup(trips, |t| (&t.employee, &t.country))
}

fn rollup<'a>(
    trips: &'a [TripFact],
    keys: impl Fn(&'a TripFact) -> (&'a String, &'a String),
) -> Vec<TripRollup> {
    let mut groups: BTreeMap<&str, TripRollup> = BTreeMap::new();
    for trip in trips {
        let (primary, secondary) = keys(trip);
        let entry = groups.entry(primary).or_insert_with(|| TripRollup {
            key: primary.clone(),
            trips: 0,
            participants: BTreeSet::new(),
            total_cost: 0.0,
        });
        entry.trips += 1;
        entry.participants.insert(secondary.clone());
        entry.total_cost += trip.cost;
    }
    let mut rollups: Vec<TripRollup> = groups.into_values().collect();
    rollups.sort_by(|a, b| {
        b.total_cost
            .total_cmp(&a.total_cost)
            .then_with(|| a.key.cmp(&b.key))
    });
    rollups
}
