//! Reference backend for the `/api/random` endpoint.

pub mod entropy;
pub mod generator;
pub mod server;

pub use entropy::DeviceEntropy;
pub use entropy::EntropySource;
pub use generator::RandomGenerator;
pub use server::ServerConfig;
pub use server::ServerError;
pub use server::router;
pub use server::serve;
pub use server::serve_listener;
