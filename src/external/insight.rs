use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::entities::{Itinerary, ItineraryInsight, Leg, ServiceHealth, TransportMode};
use crate::error::{insight_unavailable_error, Error};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn fetch_insights(
        &self,
        itineraries: &[Itinerary],
        preferences: Option<&[String]>,
    ) -> Result<Vec<ItineraryInsight>, Error>;

    async fn health_check(&self) -> ServiceHealth;
}

#[derive(Debug)]
pub struct InsightClient {
    client: reqwest::Client,
    api_url: String,
}

impl InsightClient {
    pub fn new(api_url: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, api_url })
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::new(env::var("INSIGHT_API_URL")?)
    }
}

#[async_trait]
impl InsightProvider for InsightClient {
    // every failure mode collapses into one "unavailable" error; the
    // caller decides whether that degrades or aborts
    #[tracing::instrument(skip(self, itineraries))]
    async fn fetch_insights(
        &self,
        itineraries: &[Itinerary],
        preferences: Option<&[String]>,
    ) -> Result<Vec<ItineraryInsight>, Error> {
        let url = format!("{}/insights/itineraries", self.api_url);
        let body = InsightRequest::new(itineraries, preferences);

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("insight request failed: {}", e);
                insight_unavailable_error()
            })?;

        if !res.status().is_success() {
            tracing::warn!("insight service returned status {}", res.status());
            return Err(insight_unavailable_error());
        }

        let body: InsightResponse = res.json().await.map_err(|e| {
            tracing::warn!("failed to parse insight response: {}", e);
            insight_unavailable_error()
        })?;

        Ok(body.itinerary_insights)
    }

    async fn health_check(&self) -> ServiceHealth {
        let url = format!("{}/health", self.api_url);

        match self.client.get(&url).send().await {
            Ok(res) if res.status().is_success() => {
                ServiceHealth::healthy("insight API is responding")
            }
            Ok(res) => ServiceHealth::unhealthy(format!(
                "insight API returned status code: {}",
                res.status()
            )),
            Err(e) if e.is_timeout() => {
                ServiceHealth::unhealthy("insight API request timed out".into())
            }
            Err(e) => ServiceHealth::unhealthy(format!("insight API check failed: {}", e)),
        }
    }
}

#[derive(Debug, Serialize)]
struct InsightRequest {
    itineraries: Vec<ItineraryPayload>,
    // omitted entirely when there is no preference signal
    #[serde(skip_serializing_if = "Option::is_none")]
    user_preferences: Option<Vec<String>>,
}

impl InsightRequest {
    fn new(itineraries: &[Itinerary], preferences: Option<&[String]>) -> Self {
        Self {
            itineraries: itineraries.iter().map(ItineraryPayload::from).collect(),
            user_preferences: preferences.map(<[String]>::to_vec),
        }
    }
}

#[derive(Debug, Serialize)]
struct ItineraryPayload {
    start: String,
    end: String,
    duration: i64,
    walk_distance: f64,
    walk_time: i64,
    legs: Vec<LegPayload>,
}

impl From<&Itinerary> for ItineraryPayload {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            start: itinerary.start.to_rfc3339(),
            end: itinerary.end.to_rfc3339(),
            duration: itinerary.duration,
            walk_distance: itinerary.walk_distance,
            walk_time: itinerary.walk_time,
            legs: itinerary.legs.iter().map(LegPayload::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LegPayload {
    mode: TransportMode,
    duration: i64,
    distance: f64,
    from_place: String,
    to_place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<RoutePayload>,
}

impl From<&Leg> for LegPayload {
    fn from(leg: &Leg) -> Self {
        Self {
            mode: leg.mode,
            duration: leg.duration,
            distance: leg.distance,
            from_place: leg.from_place.name.clone().unwrap_or_default(),
            to_place: leg.to_place.name.clone().unwrap_or_default(),
            route: leg.route.as_ref().map(|route| RoutePayload {
                short_name: route.short_name.clone(),
                long_name: route.long_name.clone(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct RoutePayload {
    short_name: String,
    long_name: String,
}

#[derive(Debug, Deserialize)]
struct InsightResponse {
    #[serde(default)]
    itinerary_insights: Vec<ItineraryInsight>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};

    use crate::entities::{Coordinates, Place, RouteInfo};

    fn sample_itinerary() -> Itinerary {
        let start = Utc.with_ymd_and_hms(2025, 10, 14, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 10, 14, 10, 45, 0).unwrap();

        Itinerary {
            start,
            end,
            duration: 2700,
            walk_distance: 500.0,
            walk_time: 400,
            legs: vec![Leg {
                mode: TransportMode::Bus,
                start,
                end,
                duration: 2100,
                distance: 15000.0,
                from_place: Place {
                    coordinates: Coordinates::new(60.1710, 24.9400).unwrap(),
                    name: None,
                },
                to_place: Place {
                    coordinates: Coordinates::new(60.2055, 24.6559).unwrap(),
                    name: Some("Destination".into()),
                },
                route: Some(RouteInfo {
                    short_name: "550".into(),
                    long_name: "Helsinki - Espoo".into(),
                    description: None,
                }),
                ai_insight: None,
            }],
            ai_description: None,
        }
    }

    #[test]
    fn absent_preferences_are_omitted_from_the_payload() {
        let request = InsightRequest::new(&[sample_itinerary()], None);
        let payload = serde_json::to_value(&request).unwrap();

        assert!(payload.get("user_preferences").is_none());
    }

    #[test]
    fn preferences_are_sent_in_order() {
        let preferences = vec!["prefer walking".to_string(), "avoid crowds".to_string()];
        let request = InsightRequest::new(&[sample_itinerary()], Some(&preferences));
        let payload = serde_json::to_value(&request).unwrap();

        assert_eq!(
            payload["user_preferences"],
            serde_json::json!(["prefer walking", "avoid crowds"])
        );
    }

    #[test]
    fn leg_payload_uses_empty_names_for_anonymous_places() {
        let request = InsightRequest::new(&[sample_itinerary()], None);
        let payload = serde_json::to_value(&request).unwrap();

        let leg = &payload["itineraries"][0]["legs"][0];
        assert_eq!(leg["mode"], "BUS");
        assert_eq!(leg["from_place"], "");
        assert_eq!(leg["to_place"], "Destination");
        assert_eq!(leg["route"]["short_name"], "550");
    }

    #[test]
    fn partial_insight_entries_deserialize() {
        let body = r#"{
            "itinerary_insights": [
                { "leg_insights": ["Short walk to the stop", null] },
                { "ai_description": "Fastest option", "leg_insights": [] }
            ]
        }"#;

        let response: InsightResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.itinerary_insights.len(), 2);
        assert_eq!(response.itinerary_insights[0].ai_description, None);
        assert_eq!(
            response.itinerary_insights[0].leg_insights,
            vec![Some("Short walk to the stop".to_string()), None]
        );
        assert_eq!(
            response.itinerary_insights[1].ai_description.as_deref(),
            Some("Fastest option")
        );
    }
}
