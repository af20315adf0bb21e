use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Coordinates;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preference {
    pub id: Uuid,
    pub user_id: Uuid,
    pub prompt: String,
}

impl Preference {
    pub fn new(user_id: Uuid, prompt: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            prompt,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutePreference {
    pub id: Uuid,
    pub user_id: Uuid,
    pub prompt: String,
    pub origin: Coordinates,
    pub destination: Coordinates,
}

impl RoutePreference {
    pub fn new(
        user_id: Uuid,
        prompt: String,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            prompt,
            origin,
            destination,
        }
    }

    // a stored route preference only applies when all four coordinates
    // equal the searched pair exactly
    pub fn matches(&self, origin: &Coordinates, destination: &Coordinates) -> bool {
        self.origin == *origin && self.destination == *destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preference() -> RoutePreference {
        RoutePreference::new(
            Uuid::new_v4(),
            "avoid transfers".into(),
            Coordinates::new(60.1699, 24.9384).unwrap(),
            Coordinates::new(60.2055, 24.6559).unwrap(),
        )
    }

    #[test]
    fn matches_on_exact_coordinates() {
        let preference = preference();

        assert!(preference.matches(
            &Coordinates::new(60.1699, 24.9384).unwrap(),
            &Coordinates::new(60.2055, 24.6559).unwrap(),
        ));
    }

    #[test]
    fn any_differing_field_excludes_the_preference() {
        let preference = preference();
        let origin = Coordinates::new(60.1699, 24.9384).unwrap();
        let destination = Coordinates::new(60.2055, 24.6559).unwrap();

        let nudged = |latitude: f64, longitude: f64| {
            Coordinates::new(latitude + 0.0001, longitude).unwrap()
        };

        assert!(!preference.matches(&nudged(60.1699, 24.9384), &destination));
        assert!(!preference.matches(&Coordinates::new(60.1699, 24.939).unwrap(), &destination));
        assert!(!preference.matches(&origin, &nudged(60.2055, 24.6559)));
        assert!(!preference.matches(&origin, &Coordinates::new(60.2055, 24.656).unwrap()));
    }
}
