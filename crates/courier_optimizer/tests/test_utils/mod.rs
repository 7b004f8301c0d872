use courier_optimizer::json::types::OptimizeRequest;
use serde_json::{Value, json};

pub fn delivery(id: &str, lat: f64, lng: f64, demand: f64) -> Value {
    json!({"id": id, "coord": {"lat": lat, "lng": lng}, "demand": demand})
}

pub fn vehicle(id: &str, capacity: f64, fuel_rate: f64) -> Value {
    json!({"id": id, "name": id, "capacity": capacity, "fuelRate": fuel_rate})
}

/// A `Custom` provider carrying a line-metric matrix: the depot at 0 and
/// delivery `k` at `depot_distances[k]` meters, durations at 1 m/s.
pub fn line_matrix_provider(depot_distances: &[f64]) -> Value {
    let positions: Vec<f64> = std::iter::once(0.0)
        .chain(depot_distances.iter().copied())
        .collect();

    let cells: Vec<f64> = positions
        .iter()
        .flat_map(|&from| positions.iter().map(move |&to| (from - to).abs()))
        .collect();

    json!({"Custom": {"matrices": {"distances": cells.clone(), "durations": cells}}})
}

pub fn request(body: Value) -> OptimizeRequest {
    serde_json::from_value(body).expect("request body should deserialize")
}
