// Built-in sample data for the dashboard.
// Every panel reads from these fixtures; nothing here changes at runtime.

use super::types::{
    Bus, BusStatus, DemandLevel, DemandSample, Driver, DutyStatus, HeatPoint, Route, Stat,
};

/// Map center (lat, lng) for the heatmap.
pub const MAP_CENTER: (f64, f64) = (40.3693, 49.8315);

pub fn demand_samples() -> Vec<DemandSample> {
    [
        ("06:00", 120),
        ("09:00", 300),
        ("12:00", 200),
        ("15:00", 250),
        ("18:00", 350),
        ("21:00", 180),
    ]
    .into_iter()
    .map(|(time, passengers)| DemandSample {
        time: time.to_string(),
        passengers,
    })
    .collect()
}

/// Raw fleet records. Two entries share id 4; see [`super::normalize_bus_ids`].
pub fn buses() -> Vec<Bus> {
    let bus = |id, number: &str, location: &str, occupancy, status, lat, lng| Bus {
        id,
        number: number.to_string(),
        location: location.to_string(),
        occupancy,
        status,
        lat,
        lng,
    };

    vec![
        bus(1, "24", "Nizami St", 80, BusStatus::OnRoute, 40.3754, 49.8391),
        bus(2, "17", "Fountain Square", 30, BusStatus::Available, 40.3725, 49.8369),
        bus(3, "35", "28th May", 90, BusStatus::Crowded, 40.37986, 49.8485),
        bus(4, "12", "Heydar Aliyev Center", 60, BusStatus::OnRoute, 40.3944, 49.8676),
        bus(4, "12", "20 January", 75, BusStatus::OnRoute, 40.4041, 49.8078),
    ]
}

pub fn heat_points() -> Vec<HeatPoint> {
    [
        (40.3754, 49.8391, 0.8),
        (40.3725, 49.8369, 0.5),
        (40.37986, 49.8485, 0.9),
        (40.3944, 49.8676, 0.6),
        (40.4041, 49.8078, 0.75),
    ]
    .into_iter()
    .map(|(lat, lng, intensity)| HeatPoint {
        lat,
        lng,
        intensity,
    })
    .collect()
}

pub fn routes() -> Vec<Route> {
    let route = |id, number: &str, start: &str, end: &str, avg_demand| Route {
        id,
        number: number.to_string(),
        start_point: start.to_string(),
        end_point: end.to_string(),
        avg_demand,
    };

    vec![
        route(1, "24", "Central Station", "Airport", DemandLevel::High),
        route(2, "17", "University", "Shopping Mall", DemandLevel::Medium),
        route(3, "35", "Residential Area", "Business District", DemandLevel::High),
        route(4, "12", "Suburbs", "City Center", DemandLevel::Low),
    ]
}

pub fn drivers() -> Vec<Driver> {
    let driver = |id, name: &str, bus_number: &str, status, rating| Driver {
        id,
        name: name.to_string(),
        bus_number: bus_number.to_string(),
        status,
        rating,
    };

    vec![
        driver(1, "John Doe", "24", DutyStatus::OnDuty, 4.8),
        driver(2, "Jane Smith", "17", DutyStatus::Break, 4.5),
        driver(3, "Mike Johnson", "35", DutyStatus::OnDuty, 4.9),
        driver(4, "Sarah Brown", "12", DutyStatus::OffDuty, 4.7),
    ]
}

pub fn overview_stats() -> Vec<Stat> {
    vec![
        Stat {
            title: "Total Active Buses",
            value: "42",
            note: "+2 from last hour",
        },
        Stat {
            title: "Current Passengers",
            value: "1,274",
            note: "+18% from last hour",
        },
        Stat {
            title: "High Demand Routes",
            value: "3",
            note: "Route 24, 35, 12",
        },
        Stat {
            title: "Available for Reassignment",
            value: "5",
            note: "Near high demand areas",
        },
    ]
}

pub fn demand_predictions() -> Vec<&'static str> {
    vec![
        "Predicted peak: 18:00 - 19:00 on Route 24",
        "Recommended: Assign 2 additional buses to Route 24 at 17:30",
        "Potential crowding: Route 35 between 08:30 - 09:30",
    ]
}
