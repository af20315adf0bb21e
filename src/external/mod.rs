pub mod insight;
pub mod routing;

pub use insight::{InsightClient, InsightProvider};
pub use routing::{RoutingClient, RoutingProvider};
