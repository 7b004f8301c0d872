use crate::problem::{
    delivery::{Delivery, DeliveryBuilder},
    location::Location,
    routing_problem::{RoutingProblem, RoutingProblemParams},
    travel_matrix::TravelMatrix,
    vehicle::{Vehicle, VehicleBuilder},
};

pub(crate) fn delivery(id: &str, lat: f64, lon: f64, demand: f64) -> Delivery {
    let mut builder = DeliveryBuilder::default();
    builder
        .set_external_id(id.to_string())
        .set_location(Location::from_lat_lon(lat, lon))
        .set_demand(demand);
    builder.build()
}

pub(crate) fn vehicle(id: &str, capacity: f64) -> Vehicle {
    let mut builder = VehicleBuilder::default();
    builder
        .set_vehicle_id(id.to_string())
        .set_capacity(capacity)
        .set_fuel_rate(0.12);
    builder.build()
}

/// Depot at the origin, deliveries `l0..` with the given demands, vehicles
/// `v0..` with the given capacities. Coordinates are synthetic; tests drive
/// distances through an explicit matrix instead.
pub(crate) fn problem(demands: &[f64], capacities: &[f64]) -> RoutingProblem {
    let deliveries = demands
        .iter()
        .enumerate()
        .map(|(i, &demand)| delivery(&format!("l{i}"), 0.01 * (i + 1) as f64, 0.0, demand))
        .collect();

    let vehicles = capacities
        .iter()
        .enumerate()
        .map(|(i, &capacity)| vehicle(&format!("v{i}"), capacity))
        .collect();

    RoutingProblem::new(RoutingProblemParams {
        depot: Location::from_lat_lon(0.0, 0.0),
        deliveries,
        vehicles,
    })
    .unwrap()
}

/// Line metric: the depot sits at 0 and delivery `k` at `distances[k]`
/// meters along a line, so `cell(i, j) = |pos_i - pos_j|`. Durations mirror
/// distances at one meter per second.
pub(crate) fn matrix_from_depot_distances(distances: &[f64]) -> TravelMatrix {
    let positions: Vec<f64> = std::iter::once(0.0).chain(distances.iter().copied()).collect();

    let rows: Vec<Vec<f64>> = positions
        .iter()
        .map(|&from| positions.iter().map(|&to| (from - to).abs()).collect())
        .collect();

    TravelMatrix::from_rows(rows.clone(), rows).unwrap()
}

/// Explicit (possibly asymmetric) distance rows, depot row first. Durations
/// mirror distances at one meter per second.
pub(crate) fn matrix_from_rows(rows: &[&[f64]]) -> TravelMatrix {
    let rows: Vec<Vec<f64>> = rows.iter().map(|row| row.to_vec()).collect();

    TravelMatrix::from_rows(rows.clone(), rows).unwrap()
}
