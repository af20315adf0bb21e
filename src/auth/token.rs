use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

use crate::error::{invalid_token_error, unexpected_error, Error};

const DEFAULT_EXPIRE_MINUTES: i64 = 11520;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".into(),
        }
    }
}

pub fn issue(user_id: Uuid) -> Result<String, Error> {
    let secret = env::var("JWT_SECRET")?;
    let expire_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_EXPIRE_MINUTES);

    let claims = Claims {
        sub: user_id.to_string(),
        exp: (Utc::now() + Duration::minutes(expire_minutes)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| unexpected_error())
}

pub fn verify(token: &str) -> Result<Uuid, Error> {
    let secret = env::var("JWT_SECRET")?;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(invalid_token_error)?;

    Uuid::parse_str(&data.claims.sub).map_err(invalid_token_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_and_verify_round_trip() {
        env::set_var("JWT_SECRET", "test-secret");

        let user_id = Uuid::new_v4();
        let token = issue(user_id).unwrap();

        assert_eq!(verify(&token).unwrap(), user_id);
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        env::set_var("JWT_SECRET", "test-secret");

        let mut token = issue(Uuid::new_v4()).unwrap();
        token.push('x');

        assert!(verify(&token).is_err());
    }
}
