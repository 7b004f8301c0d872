use courier_matrix_providers::{error::MatrixError, travel_matrices::TravelMatrices};
use jiff::SignedDuration;

use super::{delivery::DeliveryIdx, units::Meters};

/// Index into the travel matrix. Slot 0 is the depot; delivery `k` occupies
/// slot `k + 1`. Kept distinct from [`DeliveryIdx`] so matrix lookups cannot
/// silently use a delivery-list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StopIdx(usize);

impl StopIdx {
    pub const DEPOT: StopIdx = StopIdx(0);

    pub const fn new(index: usize) -> Self {
        StopIdx(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }

    pub fn delivery(&self) -> Option<DeliveryIdx> {
        match self.0 {
            0 => None,
            slot => Some(DeliveryIdx::new(slot - 1)),
        }
    }
}

impl From<DeliveryIdx> for StopIdx {
    fn from(delivery: DeliveryIdx) -> Self {
        StopIdx(delivery.get() + 1)
    }
}

impl std::fmt::Display for StopIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Depot-rooted travel matrix for one optimization run. Flat row-major
/// storage; `index = from * stop_count + to`.
#[derive(Debug)]
pub struct TravelMatrix {
    distances: Vec<f64>,
    durations: Vec<f64>,
    stop_count: usize,
}

impl TravelMatrix {
    /// Validates provider output against the problem size. The matrices must
    /// cover the depot plus every delivery, in the order the coordinates
    /// were submitted; anything else corrupts every downstream lookup, so it
    /// is rejected before any assignment is attempted.
    pub fn from_matrices(
        matrices: TravelMatrices,
        delivery_count: usize,
    ) -> Result<Self, MatrixError> {
        let stop_count = delivery_count + 1;
        let expected_len = stop_count * stop_count;

        if matrices.distances.len() != expected_len || matrices.durations.len() != expected_len {
            let actual = matrices.distances.len().isqrt();
            return Err(MatrixError::Dimensions {
                expected: stop_count,
                actual,
            });
        }

        for (index, (&distance, &duration)) in matrices
            .distances
            .iter()
            .zip(matrices.durations.iter())
            .enumerate()
        {
            if !distance.is_finite() || !duration.is_finite() {
                return Err(MatrixError::InvalidCell {
                    from: index / stop_count,
                    to: index % stop_count,
                });
            }
        }

        Ok(TravelMatrix {
            distances: matrices.distances,
            durations: matrices.durations,
            stop_count,
        })
    }

    /// Convenience for callers holding row-per-stop matrices (depot row
    /// first), e.g. a precomputed matrix from the surrounding application.
    pub fn from_rows(
        distances: Vec<Vec<f64>>,
        durations: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        let stop_count = distances.len();

        if stop_count == 0 {
            return Err(MatrixError::Dimensions {
                expected: 1,
                actual: 0,
            });
        }

        Self::from_matrices(
            TravelMatrices::from_rows(distances, durations),
            stop_count - 1,
        )
    }

    #[inline(always)]
    fn index(&self, from: StopIdx, to: StopIdx) -> usize {
        from.get() * self.stop_count + to.get()
    }

    #[inline(always)]
    pub fn distance(&self, from: StopIdx, to: StopIdx) -> Meters {
        Meters::new(self.distances[self.index(from, to)])
    }

    #[inline(always)]
    pub fn duration(&self, from: StopIdx, to: StopIdx) -> SignedDuration {
        SignedDuration::from_secs_f64(self.durations[self.index(from, to)])
    }

    pub fn stop_count(&self) -> usize {
        self.stop_count
    }
}
