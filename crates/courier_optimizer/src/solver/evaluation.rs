use jiff::SignedDuration;

use crate::problem::{
    delivery::DeliveryIdx,
    travel_matrix::{StopIdx, TravelMatrix},
    units::Meters,
};

/// Distance and duration of one closed loop: depot, the stops in order,
/// back to the depot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLegs {
    pub distance: Meters,
    pub duration: SignedDuration,
}

impl RouteLegs {
    pub const ZERO: RouteLegs = RouteLegs {
        distance: Meters::ZERO,
        duration: SignedDuration::ZERO,
    };
}

/// Sums the matrix cells along depot -> stops -> depot, return leg included.
/// An empty route never leaves the depot and costs nothing.
pub fn evaluate_route(stops: &[DeliveryIdx], matrix: &TravelMatrix) -> RouteLegs {
    if stops.is_empty() {
        return RouteLegs::ZERO;
    }

    let mut distance = Meters::ZERO;
    let mut duration = SignedDuration::ZERO;
    let mut position = StopIdx::DEPOT;

    for &delivery in stops {
        let stop = StopIdx::from(delivery);
        distance += matrix.distance(position, stop);
        duration += matrix.duration(position, stop);
        position = stop;
    }

    distance += matrix.distance(position, StopIdx::DEPOT);
    duration += matrix.duration(position, StopIdx::DEPOT);

    RouteLegs { distance, duration }
}
