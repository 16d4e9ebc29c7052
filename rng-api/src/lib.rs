pub mod client;
pub mod endpoint;
pub mod error;
pub mod provider;
pub mod sample;
pub mod source;

pub use crate::client::build_reqwest_client;
pub use crate::endpoint::RandomClient;
pub use crate::error::ApiError;
pub use crate::error::TransportError;
pub use crate::provider::Provider;
pub use crate::sample::RandomResponse;
pub use crate::sample::RandomSample;
pub use crate::sample::Validation;
pub use crate::sample::parse_random_response;
pub use crate::source::RandomSource;
