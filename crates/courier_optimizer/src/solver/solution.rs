use jiff::SignedDuration;

use crate::problem::{
    delivery::DeliveryIdx,
    units::{Liters, Meters},
    vehicle::VehicleIdx,
};

use super::cost::Totals;

/// One vehicle's evaluated route. The depot is implicit at both ends of
/// `stops`.
#[derive(Debug, Clone)]
pub struct VehicleRoute {
    pub vehicle: VehicleIdx,
    pub stops: Vec<DeliveryIdx>,
    pub distance: Meters,
    pub duration: SignedDuration,
    pub fuel: Liters,
}

impl VehicleRoute {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// The outcome of one optimization run: one route per vehicle in fleet
/// order, the deliveries no vehicle could take, and the aggregate totals.
#[derive(Debug, Clone)]
pub struct Solution {
    pub routes: Vec<VehicleRoute>,
    pub unassigned: Vec<DeliveryIdx>,
    pub totals: Totals,
}
