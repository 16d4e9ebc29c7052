use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use spinwheel_branding::SOURCE_UNKNOWN;

use crate::error::ApiError;

/// Wire shape of `GET /api/random`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomResponse {
    pub rand: f64,
    pub source: String,
    pub timestamp: String,
}

/// A random fraction together with where it came from.
///
/// `value` is nominally in `[0, 1)` but may be exactly `1.0`; consumers must
/// clamp rather than trust the upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSample {
    pub value: f64,
    pub source: String,
    pub timestamp: Option<String>,
}

impl RandomSample {
    pub fn new(value: f64, source: impl Into<String>) -> Self {
        Self {
            value,
            source: source.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

impl From<RandomResponse> for RandomSample {
    fn from(response: RandomResponse) -> Self {
        Self {
            value: response.rand,
            source: response.source,
            timestamp: Some(response.timestamp),
        }
    }
}

/// How much of the payload must be present for it to count as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// `rand` must be a number, `source` and `timestamp` non-empty strings.
    #[default]
    Strict,
    /// Only `rand` is required. A missing `source` becomes `"unknown"`.
    Lenient,
}

/// Interprets a response body. Mistyped or missing fields are errors, never
/// coerced.
pub fn parse_random_response(body: &str, validation: Validation) -> Result<RandomSample, ApiError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| ApiError::Malformed(format!("body is not JSON: {err}")))?;
    let Some(object) = value.as_object() else {
        return Err(ApiError::Malformed("body is not a JSON object".to_string()));
    };

    let rand = object
        .get("rand")
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::Malformed("missing numeric `rand`".to_string()))?;

    let source = non_empty_str(object.get("source"));
    let timestamp = non_empty_str(object.get("timestamp"));

    match validation {
        Validation::Strict => {
            let source =
                source.ok_or_else(|| ApiError::Malformed("missing `source`".to_string()))?;
            let timestamp =
                timestamp.ok_or_else(|| ApiError::Malformed("missing `timestamp`".to_string()))?;
            Ok(RandomSample {
                value: rand,
                source: source.to_string(),
                timestamp: Some(timestamp.to_string()),
            })
        }
        Validation::Lenient => Ok(RandomSample {
            value: rand,
            source: source.unwrap_or(SOURCE_UNKNOWN).to_string(),
            timestamp: timestamp.map(str::to_string),
        }),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
