use serde::{Deserialize, Serialize};

// one entry of the insight provider's response, positionally matched to
// the itinerary it describes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItineraryInsight {
    #[serde(default)]
    pub ai_description: Option<String>,
    #[serde(default)]
    pub leg_insights: Vec<Option<String>>,
}
