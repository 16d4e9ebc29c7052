use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::sample::RandomSample;

/// Supplies random fractions.
///
/// The HTTP client is the production implementation; presenters only see this
/// trait so they can be driven by fixed samples in tests.
#[async_trait]
pub trait RandomSource: Send + Sync {
    async fn fetch(&self) -> Result<RandomSample, ApiError>;

    /// Human-readable location of the source, used in notifications.
    fn location(&self) -> String {
        "the random source".to_string()
    }
}

#[async_trait]
impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    async fn fetch(&self) -> Result<RandomSample, ApiError> {
        (**self).fetch().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

#[async_trait]
impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    async fn fetch(&self) -> Result<RandomSample, ApiError> {
        (**self).fetch().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
