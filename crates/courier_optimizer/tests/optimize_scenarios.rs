mod test_utils;

use courier_matrix_providers::{error::MatrixError, travel_matrix_client::TravelMatrixClient};
use courier_optimizer::{
    error::{InvalidInput, OptimizeError},
    solver::optimize::solve_request,
};
use serde_json::json;

use test_utils::{delivery, line_matrix_provider, request, vehicle};

#[tokio::test]
async fn nearest_feasible_greedy_leaves_the_overflow_unassigned() {
    // One vehicle, capacity 100. l1 demand 40 at 10m, l2 demand 50 at 20m,
    // l3 demand 30 at 15m. Greedy takes l1 then l3; l2 no longer fits.
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [
            delivery("l1", 0.01, 0.0, 40.0),
            delivery("l2", 0.02, 0.0, 50.0),
            delivery("l3", 0.03, 0.0, 30.0),
        ],
        "vehicles": [vehicle("van-1", 100.0, 0.12)],
        "matrixProvider": line_matrix_provider(&[10.0, 20.0, 15.0]),
    }));

    let response = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap();

    assert_eq!(response.routes.len(), 1);
    assert_eq!(response.routes[0].vehicle_id, "van-1");
    assert_eq!(response.routes[0].stop_order, vec!["l1", "l3"]);
    assert_eq!(response.unassigned, vec!["l2"]);

    // depot -> l1 (10) -> l3 (5) -> depot (15), at 1 m/s.
    let km = 30.0 / 1000.0;
    assert!((response.routes[0].distance_km - km).abs() < 1e-12);
    assert!((response.routes[0].duration_min - 0.5).abs() < 1e-12);
    assert!((response.routes[0].fuel_liters - km * 0.12).abs() < 1e-12);
}

#[tokio::test]
async fn a_delivery_too_big_for_every_vehicle_is_reported() {
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [
            delivery("small", 0.01, 0.0, 10.0),
            delivery("oversized", 0.02, 0.0, 400.0),
        ],
        "vehicles": [vehicle("van-1", 100.0, 0.12), vehicle("van-2", 120.0, 0.2)],
        "matrixProvider": line_matrix_provider(&[10.0, 20.0]),
    }));

    let response = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap();

    assert_eq!(response.unassigned, vec!["oversized"]);
    for route in &response.routes {
        assert!(!route.stop_order.contains(&"oversized".to_string()));
    }
}

#[tokio::test]
async fn zero_deliveries_are_rejected_before_the_fetch() {
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [],
        "vehicles": [vehicle("van-1", 100.0, 0.12)],
        "matrixProvider": line_matrix_provider(&[]),
    }));

    let error = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OptimizeError::InvalidInput(InvalidInput::NoDeliveries)
    ));
}

#[tokio::test]
async fn zero_vehicles_are_rejected_before_the_fetch() {
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [delivery("l1", 0.01, 0.0, 1.0)],
        "vehicles": [],
        "matrixProvider": line_matrix_provider(&[10.0]),
    }));

    let error = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OptimizeError::InvalidInput(InvalidInput::NoVehicles)
    ));
}

#[tokio::test]
async fn a_wrong_sized_matrix_fails_the_run() {
    // Two deliveries need a 3x3 matrix; the provider returns 2x2.
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [
            delivery("l1", 0.01, 0.0, 1.0),
            delivery("l2", 0.02, 0.0, 1.0),
        ],
        "vehicles": [vehicle("van-1", 100.0, 0.12)],
        "matrixProvider": line_matrix_provider(&[10.0]),
    }));

    let error = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OptimizeError::Matrix(MatrixError::Dimensions {
            expected: 3,
            actual: 2
        })
    ));
}

#[tokio::test]
async fn totals_follow_the_requested_weights() {
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [
            delivery("l1", 0.01, 0.0, 10.0),
            delivery("l2", 0.02, 0.0, 10.0),
        ],
        "vehicles": [vehicle("van-1", 100.0, 0.5)],
        "weights": {"distance": 0.7, "fuel": 0.3},
        "matrixProvider": line_matrix_provider(&[1000.0, 3000.0]),
    }));

    let response = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap();

    // depot -> l1 (1000) -> l2 (2000) -> depot (3000) = 6 km.
    assert!((response.totals.distance_km - 6.0).abs() < 1e-12);
    assert!((response.totals.fuel_liters - 3.0).abs() < 1e-12);

    let expected_cost = 0.7 * response.totals.distance_km + 0.3 * response.totals.fuel_liters;
    assert!((response.totals.cost - expected_cost).abs() < 1e-12);
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let body = json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [
            delivery("l1", 0.01, 0.0, 30.0),
            delivery("l2", 0.02, 0.0, 30.0),
            delivery("l3", 0.03, 0.0, 30.0),
            delivery("l4", 0.04, 0.0, 30.0),
        ],
        "vehicles": [vehicle("van-1", 60.0, 0.12), vehicle("van-2", 60.0, 0.12)],
        // Equal distances everywhere force tie-breaks on every pick.
        "matrixProvider": line_matrix_provider(&[5.0, 5.0, 5.0, 5.0]),
    });

    let client = TravelMatrixClient::new();
    let first = solve_request(request(body.clone()), &client).await.unwrap();
    let second = solve_request(request(body), &client).await.unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );

    // Ties resolve to the lowest submitted index, round-robin across the fleet.
    assert_eq!(first.routes[0].stop_order, vec!["l1", "l3"]);
    assert_eq!(first.routes[1].stop_order, vec!["l2", "l4"]);
}

#[tokio::test]
async fn every_delivery_ends_up_in_exactly_one_place() {
    let request = request(json!({
        "depot": {"lat": 0.0, "lng": 0.0},
        "locations": [
            delivery("l1", 0.01, 0.0, 30.0),
            delivery("l2", 0.02, 0.0, 10.0),
            delivery("l3", 0.03, 0.0, 25.0),
            delivery("l4", 0.04, 0.0, 40.0),
            delivery("l5", 0.05, 0.0, 15.0),
            delivery("l6", 0.06, 0.0, 60.0),
        ],
        "vehicles": [vehicle("van-1", 70.0, 0.12), vehicle("van-2", 70.0, 0.12)],
        "matrixProvider": line_matrix_provider(&[12.0, 7.0, 19.0, 4.0, 28.0, 16.0]),
    }));

    let response = solve_request(request, &TravelMatrixClient::new())
        .await
        .unwrap();

    let mut seen: Vec<String> = response
        .routes
        .iter()
        .flat_map(|route| route.stop_order.clone())
        .chain(response.unassigned.clone())
        .collect();
    seen.sort();

    assert_eq!(seen, vec!["l1", "l2", "l3", "l4", "l5", "l6"]);
}
