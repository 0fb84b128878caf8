//! Sampling location value object.

use serde::{Deserialize, Serialize};

/// Where a reading was taken. Stored as a JSON column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Name of the nearest village or landmark.
    #[serde(default)]
    pub village: Option<String>,
}

impl GeoPoint {
    /// Validate that the coordinates are on the globe.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        let good = GeoPoint {
            latitude: -8.65,
            longitude: 115.21,
            village: Some("Sanur".into()),
        };
        assert!(good.is_valid());

        let bad = GeoPoint {
            latitude: 95.0,
            longitude: 0.0,
            village: None,
        };
        assert!(!bad.is_valid());
    }
}
