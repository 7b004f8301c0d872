use geo::{Distance, Haversine};

use crate::travel_matrices::TravelMatrices;

/// Great-circle fallback matrices: distances via haversine, durations derived
/// from a constant average speed in km/h. Deterministic and offline.
pub fn as_the_crow_flies_matrices<P>(points: &[P], speed_kmh: f64) -> TravelMatrices
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    let n = points.len();
    let speed_ms = speed_kmh / 3.6;

    let mut distances = vec![0.0; n * n];
    let mut durations = vec![0.0; n * n];

    for (i, from) in points.iter().enumerate() {
        for (j, to) in points.iter().enumerate() {
            if i == j {
                continue;
            }

            let meters = Haversine.distance(from.into(), to.into());
            distances[i * n + j] = meters;
            durations[i * n + j] = meters / speed_ms;
        }
    }

    TravelMatrices {
        distances,
        durations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_are_symmetric_with_zero_diagonal() {
        let points = [
            geo_types::Point::new(4.3517, 50.8503),
            geo_types::Point::new(4.4025, 51.2194),
            geo_types::Point::new(3.7174, 51.0543),
        ];

        let matrices = as_the_crow_flies_matrices(&points, 50.0);

        for i in 0..3 {
            assert_eq!(matrices.distances[i * 3 + i], 0.0);
            for j in 0..3 {
                assert_eq!(matrices.distances[i * 3 + j], matrices.distances[j * 3 + i]);
            }
        }
    }

    #[test]
    fn durations_follow_the_configured_speed() {
        let points = [
            geo_types::Point::new(4.3517, 50.8503),
            geo_types::Point::new(4.4025, 51.2194),
        ];

        let matrices = as_the_crow_flies_matrices(&points, 36.0);

        // 36 km/h = 10 m/s
        let expected = matrices.distances[1] / 10.0;
        assert!((matrices.durations[1] - expected).abs() < 1e-9);
    }
}
