use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Duration;

use crate::entities::{Coordinates, Itinerary, Leg, Place, RouteInfo, TransportMode};
use crate::error::{
    routing_data_error, routing_network_error, routing_provider_error, Error,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ITINERARY_QUERY: &str = r#"
query GetItineraries(
    $originLat: CoordinateValue!
    $originLon: CoordinateValue!
    $destinationLat: CoordinateValue!
    $destinationLon: CoordinateValue!
    $first: Int
    $earliestDeparture: OffsetDateTime!
) {
    planConnection(
        origin: {
            location: {
                coordinate: {
                    latitude: $originLat,
                    longitude: $originLon
                }
            }
        }
        destination: {
            location: {
                coordinate: {
                    latitude: $destinationLat,
                    longitude: $destinationLon
                }
            }
        }
        first: $first
        dateTime: {
            earliestDeparture: $earliestDeparture
        }
    ) {
        edges {
            node {
                start
                end
                duration
                walkDistance
                walkTime
                legs {
                    mode
                    start {
                        scheduledTime
                    }
                    end {
                        scheduledTime
                    }
                    duration
                    distance
                    from {
                        name
                        lat
                        lon
                    }
                    to {
                        name
                        lat
                        lon
                    }
                    route {
                        shortName
                        longName
                        desc
                    }
                }
            }
        }
    }
}
"#;

#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn fetch_itineraries(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        earliest_departure: DateTime<Utc>,
        count: u32,
    ) -> Result<Vec<Itinerary>, Error>;
}

#[derive(Debug)]
pub struct RoutingClient {
    client: reqwest::Client,
    api_url: String,
    subscription_key: String,
}

impl RoutingClient {
    pub fn new(api_url: String, subscription_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url,
            subscription_key,
        })
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::new(
            env::var("ROUTING_API_URL")?,
            env::var("ROUTING_SUBSCRIPTION_KEY")?,
        )
    }
}

#[async_trait]
impl RoutingProvider for RoutingClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_itineraries(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        earliest_departure: DateTime<Utc>,
        count: u32,
    ) -> Result<Vec<Itinerary>, Error> {
        let variables = json!({
            "originLat": origin.latitude,
            "originLon": origin.longitude,
            "destinationLat": destination.latitude,
            "destinationLon": destination.longitude,
            "first": count,
            "earliestDeparture": earliest_departure.to_rfc3339(),
        });

        let res = self
            .client
            .post(&self.api_url)
            .query(&[("digitransit-subscription-key", &self.subscription_key)])
            .json(&json!({ "query": ITINERARY_QUERY, "variables": variables }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("network error while contacting routing provider: {}", e);
                routing_network_error()
            })?;

        if !res.status().is_success() {
            tracing::error!("routing provider returned status {}", res.status());
            return Err(routing_provider_error());
        }

        let body = res.text().await.map_err(|e| {
            tracing::error!("network error while reading routing response: {}", e);
            routing_network_error()
        })?;

        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<Vec<Itinerary>, Error> {
    let response: GraphQlResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("failed to parse routing response: {}", e);
        routing_data_error()
    })?;

    if let Some(errors) = response.errors {
        if let Some(error) = errors.first() {
            tracing::error!("routing provider returned an error: {}", error.message);
            return Err(routing_provider_error());
        }
    }

    // a missing plan is a valid zero-result response, not an error
    let edges = response
        .data
        .and_then(|data| data.plan_connection)
        .map(|plan| plan.edges)
        .unwrap_or_default();

    edges
        .into_iter()
        .map(|edge| parse_itinerary(edge.node))
        .collect()
}

fn parse_itinerary(node: PlanNode) -> Result<Itinerary, Error> {
    Ok(Itinerary {
        start: parse_datetime(&node.start)?,
        end: parse_datetime(&node.end)?,
        duration: node.duration,
        walk_distance: node.walk_distance,
        walk_time: node.walk_time,
        legs: node
            .legs
            .into_iter()
            .map(parse_leg)
            .collect::<Result<_, _>>()?,
        ai_description: None,
    })
}

fn parse_leg(leg: WireLeg) -> Result<Leg, Error> {
    Ok(Leg {
        mode: leg.mode,
        start: parse_datetime(&leg.start.scheduled_time)?,
        end: parse_datetime(&leg.end.scheduled_time)?,
        duration: leg.duration,
        distance: leg.distance,
        from_place: parse_place(leg.from)?,
        to_place: parse_place(leg.to)?,
        route: leg.route.map(|route| RouteInfo {
            short_name: route.short_name,
            long_name: route.long_name,
            description: route.desc,
        }),
        ai_insight: None,
    })
}

fn parse_place(stop: WireStop) -> Result<Place, Error> {
    Ok(Place {
        coordinates: Coordinates::new(stop.lat, stop.lon).map_err(|_| routing_data_error())?,
        name: stop.name,
    })
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc))
        .map_err(|_| routing_data_error())
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<PlanData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct PlanData {
    #[serde(rename = "planConnection")]
    plan_connection: Option<PlanConnection>,
}

#[derive(Deserialize)]
struct PlanConnection {
    edges: Vec<PlanEdge>,
}

#[derive(Deserialize)]
struct PlanEdge {
    node: PlanNode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanNode {
    start: String,
    end: String,
    duration: i64,
    walk_distance: f64,
    walk_time: i64,
    legs: Vec<WireLeg>,
}

#[derive(Deserialize)]
struct WireLeg {
    mode: TransportMode,
    start: WireLegTime,
    end: WireLegTime,
    duration: i64,
    distance: f64,
    from: WireStop,
    to: WireStop,
    route: Option<WireRoute>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLegTime {
    scheduled_time: String,
}

#[derive(Deserialize)]
struct WireStop {
    name: Option<String>,
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRoute {
    short_name: String,
    long_name: String,
    desc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_RESPONSE: &str = r#"{
        "data": {
            "planConnection": {
                "edges": [
                    {
                        "node": {
                            "start": "2025-10-14T10:00:00+00:00",
                            "end": "2025-10-14T10:45:00+00:00",
                            "duration": 2700,
                            "walkDistance": 500.0,
                            "walkTime": 400,
                            "legs": [
                                {
                                    "mode": "WALK",
                                    "start": { "scheduledTime": "2025-10-14T10:00:00+00:00" },
                                    "end": { "scheduledTime": "2025-10-14T10:10:00+00:00" },
                                    "duration": 600,
                                    "distance": 500.0,
                                    "from": { "name": "Origin", "lat": 60.1699, "lon": 24.9384 },
                                    "to": { "name": "Bus Stop", "lat": 60.1710, "lon": 24.9400 },
                                    "route": null
                                },
                                {
                                    "mode": "BUS",
                                    "start": { "scheduledTime": "2025-10-14T10:10:00+00:00" },
                                    "end": { "scheduledTime": "2025-10-14T10:45:00+00:00" },
                                    "duration": 2100,
                                    "distance": 15000.0,
                                    "from": { "name": "Bus Stop", "lat": 60.1710, "lon": 24.9400 },
                                    "to": { "name": "Destination", "lat": 60.2055, "lon": 24.6559 },
                                    "route": {
                                        "shortName": "550",
                                        "longName": "Helsinki - Espoo",
                                        "desc": "Express bus service"
                                    }
                                }
                            ]
                        }
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_a_plan_into_itineraries() {
        let itineraries = parse_response(PLAN_RESPONSE).unwrap();

        assert_eq!(itineraries.len(), 1);

        let itinerary = &itineraries[0];
        assert_eq!(itinerary.duration, 2700);
        assert_eq!(itinerary.walk_distance, 500.0);
        assert_eq!(itinerary.walk_time, 400);
        assert_eq!(itinerary.legs.len(), 2);
        assert_eq!(itinerary.ai_description, None);

        let walk = &itinerary.legs[0];
        assert_eq!(walk.mode, TransportMode::Walk);
        assert_eq!(walk.route, None);
        assert_eq!(walk.from_place.name.as_deref(), Some("Origin"));
        assert_eq!(walk.ai_insight, None);

        let bus = &itinerary.legs[1];
        assert_eq!(bus.mode, TransportMode::Bus);
        assert_eq!(bus.route.as_ref().unwrap().short_name, "550");
        assert_eq!(bus.distance, 15000.0);
    }

    #[test]
    fn zero_edges_parse_as_no_itineraries() {
        let body = r#"{ "data": { "planConnection": { "edges": [] } } }"#;

        assert!(parse_response(body).unwrap().is_empty());
    }

    #[test]
    fn missing_plan_parses_as_no_itineraries() {
        assert!(parse_response(r#"{ "data": {} }"#).unwrap().is_empty());
        assert!(parse_response(r#"{ "data": null }"#).unwrap().is_empty());
    }

    #[test]
    fn graphql_errors_are_a_provider_failure() {
        let body = r#"{ "errors": [{ "message": "rate limited" }] }"#;

        let err = parse_response(body).unwrap_err();
        assert_eq!(err.code, crate::error::routing_provider_error().code);
    }

    #[test]
    fn unknown_mode_is_a_data_failure() {
        let body = PLAN_RESPONSE.replace(r#""WALK""#, r#""TELEPORT""#);

        let err = parse_response(&body).unwrap_err();
        assert_eq!(err.code, crate::error::routing_data_error().code);
    }

    #[test]
    fn malformed_timestamps_are_a_data_failure() {
        let body = PLAN_RESPONSE.replace("2025-10-14T10:00:00+00:00", "yesterday-ish");

        let err = parse_response(&body).unwrap_err();
        assert_eq!(err.code, crate::error::routing_data_error().code);
    }
}
