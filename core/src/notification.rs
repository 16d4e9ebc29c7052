//! Turns fetch failures into the single message shown to the user, and
//! classifies source labels for the status indicator.

use http::StatusCode;
use spinwheel_branding::SOURCE_FALLBACK;
use spinwheel_branding::SOURCE_MICROPHONE;
use spinwheel_rng_api::ApiError;
use spinwheel_rng_api::TransportError;

/// A user-visible message describing why a fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Timeout,
    ServerError,
    InvalidResponse,
    Unreachable,
    Other,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// `location` is where the source was expected (usually its base URL).
pub fn notification_for(err: &ApiError, location: &str) -> Notification {
    let (kind, message) = match err {
        _ if err.is_timeout() => (
            NotificationKind::Timeout,
            "Request timed out. Please check your connection and try again.".to_string(),
        ),
        _ if err.status() == Some(StatusCode::INTERNAL_SERVER_ERROR) => (
            NotificationKind::ServerError,
            "Backend server error. Please ensure the backend is running.".to_string(),
        ),
        ApiError::Malformed(_) => (
            NotificationKind::InvalidResponse,
            "Received invalid data from server. Please try again.".to_string(),
        ),
        ApiError::Transport(TransportError::Network(_)) => (
            NotificationKind::Unreachable,
            format!("Cannot connect to backend. Please ensure the server is running at {location}"),
        ),
        ApiError::Transport(_) => (
            NotificationKind::Other,
            "Failed to generate random number. Please try again.".to_string(),
        ),
    };
    Notification { kind, message }
}

/// Where a displayed fraction came from, as far as the indicator cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    /// Hardware-derived randomness reported by the backend.
    Hardware,
    /// The backend's own software fallback.
    BackendFallback,
    /// Anything else, including locally generated values.
    Other,
}

impl SourceStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            SOURCE_MICROPHONE => SourceStatus::Hardware,
            SOURCE_FALLBACK => SourceStatus::BackendFallback,
            _ => SourceStatus::Other,
        }
    }
}
