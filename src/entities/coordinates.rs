use serde::{Deserialize, Serialize};

use crate::error::{invalid_coordinates_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinatesRepr")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_coordinates_error());
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

// deserialization funnels through the same range check as Coordinates::new
#[derive(Deserialize)]
struct CoordinatesRepr {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<CoordinatesRepr> for Coordinates {
    type Error = Error;

    fn try_from(repr: CoordinatesRepr) -> Result<Self, Self::Error> {
        Coordinates::new(repr.latitude, repr.longitude)
    }
}

#[test]
fn rejects_out_of_range_latitude() {
    assert!(Coordinates::new(90.5, 0.0).is_err());
    assert!(Coordinates::new(-90.5, 0.0).is_err());
}

#[test]
fn rejects_out_of_range_longitude() {
    assert!(Coordinates::new(0.0, 180.5).is_err());
    assert!(Coordinates::new(0.0, -180.5).is_err());
}

#[test]
fn accepts_boundary_values() {
    Coordinates::new(-90.0, 180.0).unwrap();
    Coordinates::new(90.0, -180.0).unwrap();
}

#[test]
fn deserialization_checks_the_range() {
    let parsed: Coordinates =
        serde_json::from_str(r#"{"latitude": 60.1699, "longitude": 24.9384}"#).unwrap();
    assert_eq!(parsed, Coordinates::new(60.1699, 24.9384).unwrap());

    assert!(serde_json::from_str::<Coordinates>(r#"{"latitude": 91.0, "longitude": 0.0}"#).is_err());
}
