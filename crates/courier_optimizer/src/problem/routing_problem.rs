use fxhash::FxHashSet;

use crate::error::InvalidInput;

use super::{
    delivery::{Delivery, DeliveryIdx},
    location::Location,
    vehicle::{Vehicle, VehicleIdx},
};

/// Immutable input of one optimization run: the depot, the deliveries in
/// submission order, and the fleet in priority order. The delivery order
/// fixes the matrix indexing (depot at slot 0, delivery `k` at slot `k + 1`)
/// for the whole run.
#[derive(Debug)]
pub struct RoutingProblem {
    depot: Location,
    deliveries: Vec<Delivery>,
    vehicles: Vec<Vehicle>,
}

pub struct RoutingProblemParams {
    pub depot: Location,
    pub deliveries: Vec<Delivery>,
    pub vehicles: Vec<Vehicle>,
}

impl RoutingProblem {
    pub fn new(params: RoutingProblemParams) -> Result<Self, InvalidInput> {
        if params.vehicles.is_empty() {
            return Err(InvalidInput::NoVehicles);
        }

        if params.deliveries.is_empty() {
            return Err(InvalidInput::NoDeliveries);
        }

        if !params.depot.is_finite() {
            return Err(InvalidInput::NonFiniteCoordinate);
        }

        let mut delivery_ids = FxHashSet::default();
        for delivery in &params.deliveries {
            if !delivery.location().is_finite() {
                return Err(InvalidInput::NonFiniteCoordinate);
            }

            if delivery.demand() < 0.0 || !delivery.demand().is_finite() {
                return Err(InvalidInput::NegativeDemand {
                    id: delivery.external_id().to_owned(),
                });
            }

            if !delivery_ids.insert(delivery.external_id()) {
                return Err(InvalidInput::DuplicateDeliveryId {
                    id: delivery.external_id().to_owned(),
                });
            }
        }

        let mut vehicle_ids = FxHashSet::default();
        for vehicle in &params.vehicles {
            if vehicle.capacity() < 0.0 || !vehicle.capacity().is_finite() {
                return Err(InvalidInput::NegativeCapacity {
                    id: vehicle.external_id().to_owned(),
                });
            }

            if vehicle.fuel_rate().value() < 0.0 || !vehicle.fuel_rate().value().is_finite() {
                return Err(InvalidInput::NegativeFuelRate {
                    id: vehicle.external_id().to_owned(),
                });
            }

            if !vehicle_ids.insert(vehicle.external_id()) {
                return Err(InvalidInput::DuplicateVehicleId {
                    id: vehicle.external_id().to_owned(),
                });
            }
        }

        Ok(RoutingProblem {
            depot: params.depot,
            deliveries: params.deliveries,
            vehicles: params.vehicles,
        })
    }

    pub fn depot(&self) -> &Location {
        &self.depot
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn delivery(&self, delivery_id: DeliveryIdx) -> &Delivery {
        &self.deliveries[delivery_id]
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.len()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    /// The ordered coordinate list a matrix provider must be queried with:
    /// depot first, then deliveries in submission order.
    pub fn matrix_points(&self) -> Vec<Location> {
        std::iter::once(self.depot)
            .chain(self.deliveries.iter().map(|delivery| *delivery.location()))
            .collect()
    }
}
