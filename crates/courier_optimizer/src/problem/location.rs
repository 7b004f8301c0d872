/// A WGS84 point. Longitude is x, latitude is y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn is_finite(&self) -> bool {
        self.point.x().is_finite() && self.point.y().is_finite()
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_round_trip() {
        let location = Location::from_lat_lon(50.8503, 4.3517);

        assert_eq!(location.lat(), 50.8503);
        assert_eq!(location.lon(), 4.3517);
        assert!(location.is_finite());
    }

    #[test]
    fn nan_coordinates_are_not_finite() {
        assert!(!Location::from_lat_lon(f64::NAN, 4.3517).is_finite());
    }
}
