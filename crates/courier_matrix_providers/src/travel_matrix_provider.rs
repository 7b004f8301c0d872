use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{osrm_api::OsrmProfile, travel_matrices::TravelMatrices};

#[derive(Deserialize, Serialize, JsonSchema, Clone)]
pub enum TravelMatrixProvider {
    /// https://project-osrm.org/docs/v5.24.0/api/#table-service
    OsrmApi {
        profile: OsrmProfile,
    },

    AsTheCrowFlies {
        speed_kmh: f64,
    },

    Custom {
        matrices: TravelMatrices,
    },
}

impl Default for TravelMatrixProvider {
    fn default() -> Self {
        TravelMatrixProvider::OsrmApi {
            profile: OsrmProfile::Driving,
        }
    }
}

impl std::hash::Hash for TravelMatrixProvider {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            TravelMatrixProvider::OsrmApi { profile } => {
                state.write_u8(0);
                profile.hash(state);
            }
            TravelMatrixProvider::AsTheCrowFlies { speed_kmh } => {
                state.write_u8(1);
                state.write_u64(speed_kmh.to_bits());
            }
            TravelMatrixProvider::Custom { matrices } => {
                state.write_u8(2);
                matrices.hash(state);
            }
        }
    }
}
