use crate::{
    as_the_crow_flies::as_the_crow_flies_matrices, error::MatrixError, osrm_api::OsrmTableClient,
    travel_matrices::TravelMatrices, travel_matrix_provider::TravelMatrixProvider,
};

pub struct TravelMatrixClient {
    osrm_client: OsrmTableClient,
}

impl TravelMatrixClient {
    pub fn new() -> Self {
        Self {
            osrm_client: OsrmTableClient::from_env(),
        }
    }

    pub async fn fetch_matrices<P>(
        &self,
        points: &[P],
        provider: TravelMatrixProvider,
    ) -> Result<TravelMatrices, MatrixError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        match provider {
            TravelMatrixProvider::OsrmApi { profile } => {
                self.osrm_client.fetch_matrices(points, profile).await
            }
            TravelMatrixProvider::AsTheCrowFlies { speed_kmh } => {
                Ok(as_the_crow_flies_matrices(points, speed_kmh))
            }
            TravelMatrixProvider::Custom { matrices } => Ok(matrices),
        }
    }
}

impl Default for TravelMatrixClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn custom_matrices_pass_through_verbatim() {
        let client = TravelMatrixClient::new();
        let points = [geo_types::Point::new(4.35, 50.85)];
        let matrices = TravelMatrices {
            distances: vec![0.0],
            durations: vec![0.0],
        };

        let fetched = client
            .fetch_matrices(&points, TravelMatrixProvider::Custom { matrices })
            .await
            .unwrap();

        assert_eq!(fetched.distances, vec![0.0]);
        assert_eq!(fetched.durations, vec![0.0]);
    }

    #[tokio::test]
    async fn as_the_crow_flies_needs_no_network() {
        let client = TravelMatrixClient::new();
        let points = [
            geo_types::Point::new(4.3517, 50.8503),
            geo_types::Point::new(4.4025, 51.2194),
        ];

        let fetched = client
            .fetch_matrices(&points, TravelMatrixProvider::AsTheCrowFlies { speed_kmh: 50.0 })
            .await
            .unwrap();

        assert_eq!(fetched.distances.len(), 4);
        assert!(fetched.distances[1] > 0.0);
    }
}
