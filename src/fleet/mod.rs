// Fleet data module.
// Domain types, built-in sample data, and the read-only dataset the UI draws from.

pub mod mock;
pub mod types;

use std::collections::HashSet;

pub use types::*;

/// A bus whose id collided with an earlier record and was given a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renumbered {
    pub location: String,
    pub old_id: u32,
    pub new_id: u32,
}

/// Make bus ids unique. Later duplicates get the next free id above the
/// current maximum; the first occurrence keeps its id and order is preserved.
/// Past `u32::MAX` the lowest unused id is taken instead.
pub fn normalize_bus_ids(mut buses: Vec<Bus>) -> (Vec<Bus>, Vec<Renumbered>) {
    let mut taken: HashSet<u32> = buses.iter().map(|b| b.id).collect();
    let mut next_id = buses
        .iter()
        .map(|b| b.id)
        .max()
        .unwrap_or(0)
        .checked_add(1);
    let mut seen = HashSet::new();
    let mut renumbered = Vec::new();

    for bus in &mut buses {
        if seen.insert(bus.id) {
            continue;
        }
        let Some(new_id) = next_id
            .filter(|id| !taken.contains(id))
            .or_else(|| (1..=u32::MAX).find(|id| !taken.contains(id)))
        else {
            break;
        };

        renumbered.push(Renumbered {
            location: bus.location.clone(),
            old_id: bus.id,
            new_id,
        });
        bus.id = new_id;
        taken.insert(new_id);
        seen.insert(new_id);
        next_id = new_id.checked_add(1);
    }

    (buses, renumbered)
}

/// Everything the panels display. Built once at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub buses: Vec<Bus>,
    pub routes: Vec<Route>,
    pub drivers: Vec<Driver>,
    pub demand: Vec<DemandSample>,
    pub heat_points: Vec<HeatPoint>,
    pub stats: Vec<Stat>,
    pub predictions: Vec<&'static str>,
    /// Ids reassigned while loading the fleet.
    pub renumbered: Vec<Renumbered>,
}

impl Dataset {
    /// Load the built-in sample data.
    pub fn sample() -> Self {
        let (buses, renumbered) = normalize_bus_ids(mock::buses());
        for r in &renumbered {
            tracing::warn!(
                location = %r.location,
                old_id = r.old_id,
                new_id = r.new_id,
                "duplicate bus id renumbered"
            );
        }

        Self {
            buses,
            routes: mock::routes(),
            drivers: mock::drivers(),
            demand: mock::demand_samples(),
            heat_points: mock::heat_points(),
            stats: mock::overview_stats(),
            predictions: mock::demand_predictions(),
            renumbered,
        }
    }
}
