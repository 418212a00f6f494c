use axum::{
    http::{header::InvalidHeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Returned when a string is not one of the supported locale codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unknown locale code: '{0}'")]
    Unknown(String),
}

/// Failures while turning a routing decision into HTTP headers.
///
/// The locale middleware never surfaces these to the client: it logs them
/// and lets the request through untouched.
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Invalid redirect location '{location}': {source}")]
    RedirectLocation {
        location: String,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("Invalid preference cookie: {0}")]
    PreferenceCookie(#[source] InvalidHeaderValue),
}

/// Errors returned by the gateway's own `/api` endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error("Missing query parameter: {0}")]
    MissingParameter(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Locale(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
