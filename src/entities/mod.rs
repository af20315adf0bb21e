mod coordinates;
mod health;
mod insight;
mod itinerary;
mod place;
mod preference;
mod search;

pub use coordinates::Coordinates;
pub use health::{HealthStatus, ServiceHealth};
pub use insight::ItineraryInsight;
pub use itinerary::{Itinerary, Leg, RouteInfo, TransportMode};
pub use place::Place;
pub use preference::{Preference, RoutePreference};
pub use search::{RouteSearch, RouteSearchParams};
