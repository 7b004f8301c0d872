use tracing::{Level, debug, instrument, warn};

use crate::problem::{
    delivery::DeliveryIdx,
    routing_problem::RoutingProblem,
    travel_matrix::{StopIdx, TravelMatrix},
    units::Meters,
};

/// Raw construction output: per-vehicle stop lists in fleet order, plus the
/// deliveries no vehicle had remaining capacity for.
pub struct Construction {
    pub assignments: Vec<Vec<DeliveryIdx>>,
    pub unassigned: Vec<DeliveryIdx>,
}

/// Round-robin greedy nearest-feasible assignment.
///
/// Each vehicle in fleet order repeatedly takes the closest still-unassigned
/// delivery that fits its remaining capacity, measured from its latest stop.
/// A full pass over the fleet without a single assignment means the leftovers
/// are infeasible under current capacities; they are reported, never dropped.
/// Worst case touches `deliveries x vehicles` candidate scans.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn construct_routes(problem: &RoutingProblem, matrix: &TravelMatrix) -> Construction {
    let vehicles = problem.vehicles();

    // Ascending delivery index. Scan order doubles as the tie-break, so this
    // must stay ordered; a hash set here would make runs non-reproducible.
    let mut unassigned: Vec<DeliveryIdx> =
        (0..problem.delivery_count()).map(DeliveryIdx::new).collect();

    let mut assignments: Vec<Vec<DeliveryIdx>> = vec![Vec::new(); vehicles.len()];
    let mut remaining_capacity: Vec<f64> =
        vehicles.iter().map(|vehicle| vehicle.capacity()).collect();
    let mut position: Vec<StopIdx> = vec![StopIdx::DEPOT; vehicles.len()];

    while !unassigned.is_empty() {
        let mut assigned_in_pass = false;

        for vehicle_index in 0..vehicles.len() {
            let Some(slot) = nearest_feasible(
                &unassigned,
                position[vehicle_index],
                remaining_capacity[vehicle_index],
                problem,
                matrix,
            ) else {
                continue;
            };

            let delivery = unassigned.remove(slot);
            assignments[vehicle_index].push(delivery);
            remaining_capacity[vehicle_index] -= problem.delivery(delivery).demand();
            position[vehicle_index] = StopIdx::from(delivery);
            assigned_in_pass = true;

            debug!(
                "Assigned delivery {} to vehicle {} ({} capacity left)",
                problem.delivery(delivery).external_id(),
                vehicles[vehicle_index].external_id(),
                remaining_capacity[vehicle_index],
            );
        }

        if !assigned_in_pass {
            break;
        }
    }

    if !unassigned.is_empty() {
        warn!(
            "{} deliveries do not fit any vehicle's remaining capacity",
            unassigned.len()
        );
    }

    Construction {
        assignments,
        unassigned,
    }
}

/// Position in `unassigned` of the closest delivery that fits `remaining`
/// capacity, or `None` when nothing fits. Strict `<` keeps the lowest
/// delivery index on equal distances.
fn nearest_feasible(
    unassigned: &[DeliveryIdx],
    from: StopIdx,
    remaining: f64,
    problem: &RoutingProblem,
    matrix: &TravelMatrix,
) -> Option<usize> {
    let mut best: Option<(usize, Meters)> = None;

    for (slot, &delivery) in unassigned.iter().enumerate() {
        if problem.delivery(delivery).demand() > remaining {
            continue;
        }

        let distance = matrix.distance(from, StopIdx::from(delivery));

        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((slot, distance));
        }
    }

    best.map(|(slot, _)| slot)
}
