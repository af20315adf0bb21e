use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Place;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Walk,
    Bicycle,
    Car,
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub short_name: String,
    pub long_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub mode: TransportMode,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration: i64,
    pub distance: f64,
    pub from_place: Place,
    pub to_place: Place,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteInfo>,
    // absent until the enrichment step fills it in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration: i64,
    pub walk_distance: f64,
    pub walk_time: i64,
    pub legs: Vec<Leg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_description: Option<String>,
}

#[test]
fn transport_mode_is_a_closed_set() {
    let mode: TransportMode = serde_json::from_str(r#""WALK""#).unwrap();
    assert_eq!(mode, TransportMode::Walk);

    assert!(serde_json::from_str::<TransportMode>(r#""TELEPORT""#).is_err());
}
