use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<bcrypt::BcryptError> for Error {
    fn from(err: bcrypt::BcryptError) -> Self {
        hashing_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            100 => (StatusCode::BAD_REQUEST, self.message.as_str()),
            101 => (StatusCode::NOT_FOUND, self.message.as_str()),
            102 | 104 => (StatusCode::UNAUTHORIZED, self.message.as_str()),
            103 => (StatusCode::FORBIDDEN, self.message.as_str()),
            200 => (StatusCode::BAD_GATEWAY, self.message.as_str()),
            201 => (StatusCode::SERVICE_UNAVAILABLE, self.message.as_str()),
            202 => (StatusCode::BAD_GATEWAY, self.message.as_str()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn hashing_error<T: Debug>(_: T) -> Error {
    Error {
        code: 4,
        message: "password hashing error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 100,
        message: "invalid input".into(),
    }
}

pub fn invalid_coordinates_error() -> Error {
    Error {
        code: 100,
        message: "coordinates out of range".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 101,
        message: "not found".into(),
    }
}

pub fn unauthorized_error() -> Error {
    Error {
        code: 102,
        message: "invalid credentials".into(),
    }
}

pub fn forbidden_error() -> Error {
    Error {
        code: 103,
        message: "forbidden".into(),
    }
}

pub fn invalid_token_error<T: Debug>(_: T) -> Error {
    Error {
        code: 104,
        message: "could not validate credentials".into(),
    }
}

pub fn routing_provider_error() -> Error {
    Error {
        code: 200,
        message: "routing provider error".into(),
    }
}

pub fn routing_network_error() -> Error {
    Error {
        code: 201,
        message: "routing provider unreachable".into(),
    }
}

pub fn routing_data_error() -> Error {
    Error {
        code: 202,
        message: "invalid routing provider response".into(),
    }
}

pub fn insight_unavailable_error() -> Error {
    Error {
        code: 210,
        message: "insight service unavailable".into(),
    }
}

#[test]
fn routing_failure_categories_map_to_distinct_statuses() {
    let provider = routing_provider_error().into_response();
    let network = routing_network_error().into_response();
    let data = routing_data_error().into_response();
    let unclassified = unexpected_error().into_response();

    assert_eq!(provider.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(network.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(data.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(unclassified.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_ne!(routing_provider_error().code, routing_network_error().code);
    assert_ne!(routing_network_error().code, routing_data_error().code);
    assert_ne!(routing_provider_error().code, routing_data_error().code);
}

#[test]
fn internal_errors_hide_their_message() {
    let res = database_error("connection reset").into_response();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
