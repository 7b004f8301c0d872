use courier_matrix_providers::travel_matrix_client::TravelMatrixClient;
use tracing::{Level, debug, instrument};

use crate::{
    error::OptimizeError,
    json::types::{FromProblem, OptimizeRequest, OptimizeResponse},
    problem::{
        routing_problem::RoutingProblem, travel_matrix::TravelMatrix, vehicle::VehicleIdx,
    },
};

use super::{
    construction::construct_routes,
    cost::{CostWeights, Totals},
    evaluation::evaluate_route,
    solution::{Solution, VehicleRoute},
};

/// Pure optimization pass: construct, evaluate, aggregate. Holds no state
/// and is safe to call repeatedly or in parallel on independent inputs.
pub fn optimize(problem: &RoutingProblem, matrix: &TravelMatrix, weights: &CostWeights) -> Solution {
    let construction = construct_routes(problem, matrix);

    let routes: Vec<VehicleRoute> = construction
        .assignments
        .into_iter()
        .enumerate()
        .map(|(vehicle_index, stops)| {
            let legs = evaluate_route(&stops, matrix);
            let vehicle = &problem.vehicles()[vehicle_index];

            VehicleRoute {
                vehicle: VehicleIdx::new(vehicle_index),
                stops,
                distance: legs.distance,
                duration: legs.duration,
                fuel: vehicle.fuel_rate().fuel_for(legs.distance),
            }
        })
        .collect();

    let totals = Totals::aggregate(&routes, weights);

    Solution {
        routes,
        unassigned: construction.unassigned,
        totals,
    }
}

/// Full request lifecycle: validate, fetch the travel matrix once, optimize,
/// render ids back out. Validation runs before the fetch so bad input never
/// costs a provider round trip; a failed fetch aborts the run with no
/// partial result.
#[instrument(skip_all, level = Level::DEBUG)]
pub async fn solve_request(
    mut request: OptimizeRequest,
    client: &TravelMatrixClient,
) -> Result<OptimizeResponse, OptimizeError> {
    let weights = request.weights.take().unwrap_or_default();
    let provider = request.matrix_provider.take().unwrap_or_default();

    let problem = request.into_problem()?;

    let points = problem.matrix_points();
    let matrices = client.fetch_matrices(&points, provider).await?;
    let matrix = TravelMatrix::from_matrices(matrices, problem.delivery_count())?;

    debug!(
        "Optimizing {} deliveries across {} vehicles",
        problem.delivery_count(),
        problem.vehicles().len()
    );

    let solution = optimize(&problem, &matrix, &weights);

    Ok(OptimizeResponse::from_problem(&solution, &problem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn evaluates_and_aggregates_each_route() {
        let problem = test_utils::problem(&[40.0, 50.0, 30.0], &[100.0]);
        let matrix = test_utils::matrix_from_depot_distances(&[10.0, 20.0, 15.0]);

        let solution = optimize(&problem, &matrix, &CostWeights::default());

        // depot -> L0 (10) -> L2 (5) -> depot (15)
        assert_eq!(solution.routes[0].distance.value(), 30.0);
        assert_eq!(solution.unassigned.len(), 1);

        let km = solution.routes[0].distance.kilometers();
        let fuel = solution.routes[0].fuel.value();
        assert!((fuel - km * 0.12).abs() < 1e-12);
        assert_eq!(solution.totals.cost, 0.5 * km + 0.5 * fuel);
    }

    #[test]
    fn identical_inputs_produce_identical_solutions() {
        let problem = test_utils::problem(&[10.0, 10.0, 10.0, 10.0], &[25.0, 25.0]);
        let matrix = test_utils::matrix_from_depot_distances(&[8.0, 8.0, 3.0, 8.0]);

        let first = optimize(&problem, &matrix, &CostWeights::default());
        let second = optimize(&problem, &matrix, &CostWeights::default());

        for (a, b) in first.routes.iter().zip(second.routes.iter()) {
            assert_eq!(a.stops, b.stops);
            assert_eq!(a.distance, b.distance);
        }
        assert_eq!(first.unassigned, second.unassigned);
        assert_eq!(first.totals.cost, second.totals.cost);
    }
}
