use spinwheel_branding::USER_AGENT;

use crate::error::TransportError;

/// Builds the shared `reqwest` client used for every random source request.
pub fn build_reqwest_client() -> Result<reqwest::Client, TransportError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| TransportError::Build(err.to_string()))
}
