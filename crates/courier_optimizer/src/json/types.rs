use courier_matrix_providers::travel_matrix_provider::TravelMatrixProvider;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::InvalidInput,
    problem::{
        delivery::{Delivery, DeliveryBuilder},
        location::Location,
        routing_problem::{RoutingProblem, RoutingProblemParams},
        time_window::TimeWindow,
        vehicle::{Vehicle, VehicleBuilder},
    },
    solver::{
        cost::CostWeights,
        solution::{Solution, VehicleRoute},
    },
};

pub trait FromProblem<T> {
    fn from_problem(value: T, problem: &RoutingProblem) -> Self;
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields, rename = "Coordinate")]
pub struct JsonCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl From<JsonCoordinate> for Location {
    fn from(coord: JsonCoordinate) -> Self {
        Location::from_lat_lon(coord.lat, coord.lng)
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase", rename = "Delivery")]
pub struct JsonDelivery {
    pub id: String,
    pub coord: JsonCoordinate,
    pub demand: f64,
    pub label: Option<String>,

    /// Accepted and carried, but not enforced by construction.
    pub time_window: Option<TimeWindow>,
}

impl From<JsonDelivery> for Delivery {
    fn from(value: JsonDelivery) -> Self {
        let mut builder = DeliveryBuilder::default();
        builder
            .set_external_id(value.id)
            .set_location(value.coord.into())
            .set_demand(value.demand);

        if let Some(label) = value.label {
            builder.set_label(label);
        }

        if let Some(time_window) = value.time_window {
            builder.set_time_window(time_window);
        }

        builder.build()
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase", rename = "Vehicle")]
pub struct JsonVehicle {
    pub id: String,
    pub name: String,
    pub capacity: f64,
    pub fuel_rate: f64,
}

impl From<JsonVehicle> for Vehicle {
    fn from(value: JsonVehicle) -> Self {
        let mut builder = VehicleBuilder::default();
        builder
            .set_vehicle_id(value.id)
            .set_name(value.name)
            .set_capacity(value.capacity)
            .set_fuel_rate(value.fuel_rate);

        builder.build()
    }
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase", rename = "OptimizeRequest")]
pub struct OptimizeRequest {
    pub depot: JsonCoordinate,
    pub locations: Vec<JsonDelivery>,
    pub vehicles: Vec<JsonVehicle>,
    pub weights: Option<CostWeights>,
    pub matrix_provider: Option<TravelMatrixProvider>,
}

impl OptimizeRequest {
    pub fn into_problem(self) -> Result<RoutingProblem, InvalidInput> {
        RoutingProblem::new(RoutingProblemParams {
            depot: self.depot.into(),
            deliveries: self.locations.into_iter().map(Delivery::from).collect(),
            vehicles: self.vehicles.into_iter().map(Vehicle::from).collect(),
        })
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", rename = "Route")]
pub struct JsonRoute {
    pub vehicle_id: String,
    pub stop_order: Vec<String>,
    pub distance_km: f64,
    pub duration_min: f64,
    pub fuel_liters: f64,
}

impl FromProblem<&VehicleRoute> for JsonRoute {
    fn from_problem(value: &VehicleRoute, problem: &RoutingProblem) -> Self {
        JsonRoute {
            vehicle_id: problem.vehicle(value.vehicle).external_id().to_owned(),
            stop_order: value
                .stops
                .iter()
                .map(|&delivery| problem.delivery(delivery).external_id().to_owned())
                .collect(),
            distance_km: value.distance.kilometers(),
            duration_min: value.duration.as_secs_f64() / 60.0,
            fuel_liters: value.fuel.value(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", rename = "Totals")]
pub struct JsonTotals {
    pub distance_km: f64,
    pub duration_min: f64,
    pub fuel_liters: f64,
    pub cost: f64,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", rename = "OptimizeResponse")]
pub struct OptimizeResponse {
    pub routes: Vec<JsonRoute>,
    pub unassigned: Vec<String>,
    pub totals: JsonTotals,
}

impl FromProblem<&Solution> for OptimizeResponse {
    fn from_problem(value: &Solution, problem: &RoutingProblem) -> Self {
        OptimizeResponse {
            routes: value
                .routes
                .iter()
                .map(|route| JsonRoute::from_problem(route, problem))
                .collect(),
            unassigned: value
                .unassigned
                .iter()
                .map(|&delivery| problem.delivery(delivery).external_id().to_owned())
                .collect(),
            totals: JsonTotals {
                distance_km: value.totals.distance.kilometers(),
                duration_min: value.totals.duration.as_secs_f64() / 60.0,
                fuel_liters: value.totals.fuel.value(),
                cost: value.totals.cost,
            },
        }
    }
}
