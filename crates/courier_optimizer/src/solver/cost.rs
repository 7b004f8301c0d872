use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::units::{Liters, Meters};

use super::solution::VehicleRoute;

/// Objective weights. Arbitrary non-negative numbers, not required to sum
/// to 1. Duration defaults to 0.0: it is reported but kept out of the cost
/// unless the caller opts in.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CostWeights {
    pub distance: f64,
    pub fuel: f64,
    pub duration: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        CostWeights {
            distance: 0.5,
            fuel: 0.5,
            duration: 0.0,
        }
    }
}

/// Fleet-wide sums plus the weighted scalar cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub distance: Meters,
    pub duration: SignedDuration,
    pub fuel: Liters,
    pub cost: f64,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        distance: Meters::ZERO,
        duration: SignedDuration::ZERO,
        fuel: Liters::ZERO,
        cost: 0.0,
    };

    pub fn aggregate(routes: &[VehicleRoute], weights: &CostWeights) -> Totals {
        let distance: Meters = routes.iter().map(|route| route.distance).sum();
        let fuel: Liters = routes.iter().map(|route| route.fuel).sum();
        let duration = routes
            .iter()
            .fold(SignedDuration::ZERO, |total, route| total + route.duration);

        let cost = weights.distance * distance.kilometers()
            + weights.fuel * fuel.value()
            + weights.duration * duration.as_secs_f64() / 60.0;

        Totals {
            distance,
            duration,
            fuel,
            cost,
        }
    }
}
