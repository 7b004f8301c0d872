use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw provider output: pairwise travel distances and durations for an
/// ordered point list, stored as flat row-major vectors.
/// Cell `(i, j)` lives at `i * n + j` where `n` is the point count.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
pub struct TravelMatrices {
    /// Travel distances in meters
    pub distances: Vec<f64>,

    /// Travel durations in seconds
    pub durations: Vec<f64>,
}

impl TravelMatrices {
    pub fn from_rows(distances: Vec<Vec<f64>>, durations: Vec<Vec<f64>>) -> Self {
        TravelMatrices {
            distances: distances.into_iter().flatten().collect(),
            durations: durations.into_iter().flatten().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl std::hash::Hash for TravelMatrices {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for d in &self.distances {
            state.write_u64(d.to_bits());
        }
        for t in &self.durations {
            state.write_u64(t.to_bits());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_flattens_row_major() {
        let matrices = TravelMatrices::from_rows(
            vec![vec![0.0, 10.0], vec![12.0, 0.0]],
            vec![vec![0.0, 60.0], vec![72.0, 0.0]],
        );

        assert_eq!(matrices.distances, vec![0.0, 10.0, 12.0, 0.0]);
        assert_eq!(matrices.durations, vec![0.0, 60.0, 72.0, 0.0]);
        assert_eq!(matrices.len(), 4);
    }
}
