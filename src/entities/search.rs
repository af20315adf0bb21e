use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Itinerary};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSearchParams {
    pub origin: Coordinates,
    pub destination: Coordinates,
    #[serde(default)]
    pub earliest_departure: Option<DateTime<Utc>>,
    #[serde(default)]
    pub num_itineraries: Option<u32>,
    #[serde(default)]
    pub preferences: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSearch {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub itineraries: Vec<Itinerary>,
    pub search_time: DateTime<Utc>,
}
