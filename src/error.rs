use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            4 => (StatusCode::BAD_GATEWAY, self.message.as_str()),
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            102 => (StatusCode::NOT_FOUND, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    pub fn invalid_input_error() -> Self {
        invalid_input_error()
    }

    pub fn not_found_error(what: &str) -> Self {
        not_found_error(what)
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_not_found_error(&self) -> bool {
        self.code == 102
    }

    pub fn is_upstream_error(&self) -> bool {
        self.code == 4
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn invalid_field_error(field: &str) -> Error {
    Error {
        code: 101,
        message: format!("invalid input: {}", field),
    }
}

pub fn not_found_error(what: &str) -> Error {
    Error {
        code: 102,
        message: format!("{} not found", what),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "database error");

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::warn!(%err, "reqwest error");

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error(message: impl Into<String>) -> Error {
    Error {
        code: 4,
        message: message.into(),
    }
}

/// Transport failure talking to a gateway service (timeout, refused connection, unreadable body).
pub fn unreachable_error(action: &str, err: reqwest::Error) -> Error {
    tracing::warn!(%err, action, "upstream request failed");

    upstream_error(format!("{} failed: {}", action, err))
}

pub fn serialization_error(_: serde_json::Error) -> Error {
    Error {
        code: 5,
        message: "serialization error".into(),
    }
}

pub fn io_error(_: std::io::Error) -> Error {
    Error {
        code: 6,
        message: "io error".into(),
    }
}

pub fn config_error(key: &str) -> Error {
    Error {
        code: 7,
        message: format!("invalid configuration value for {}", key),
    }
}

pub fn server_error() -> Error {
    Error {
        code: 8,
        message: "server error".into(),
    }
}
