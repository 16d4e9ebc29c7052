//! Produces `/api/random` payloads.
//!
//! Raw device bytes are hashed with SHA-256 and the digest is read as a
//! fraction of `2^256`. When no device is configured, or reading it fails, the
//! payload comes from the software RNG and is labelled `"fallback"`.

use std::sync::Arc;

use chrono::Local;
use rand::Rng;
use sha2::Digest;
use sha2::Sha256;
use spinwheel_branding::SOURCE_FALLBACK;
use spinwheel_rng_api::RandomResponse;
use tracing::debug;
use tracing::warn;

use crate::entropy::EntropySource;
use crate::entropy::SAMPLE_BYTES;

#[derive(Clone, Default)]
pub struct RandomGenerator {
    device: Option<Arc<dyn EntropySource>>,
}

impl RandomGenerator {
    pub fn new(device: Option<Arc<dyn EntropySource>>) -> Self {
        Self { device }
    }

    /// Blocking: may read from the entropy device.
    pub fn generate(&self) -> RandomResponse {
        let (rand, source) = match &self.device {
            Some(device) => match read_fraction(device.as_ref()) {
                Ok(rand) => (rand, device.label().to_string()),
                Err(err) => {
                    warn!(error = %err, "entropy device unavailable, using software rng");
                    (software_fraction(), SOURCE_FALLBACK.to_string())
                }
            },
            None => (software_fraction(), SOURCE_FALLBACK.to_string()),
        };
        debug!(rand, %source, "generated random fraction");
        RandomResponse {
            rand,
            source,
            timestamp: iso_timestamp(),
        }
    }
}

fn read_fraction(device: &dyn EntropySource) -> std::io::Result<f64> {
    let mut buf = [0u8; SAMPLE_BYTES];
    device.read_sample(&mut buf)?;
    let digest: [u8; 32] = Sha256::digest(buf).into();
    Ok(fraction_from_digest(&digest))
}

fn software_fraction() -> f64 {
    rand::rng().random::<f64>()
}

/// Interprets a digest as a big-endian integer divided by `2^256`.
///
/// Only the leading 64 bits survive the conversion to `f64` anyway. Rounding
/// to nearest means a digest starting with enough `0xff` bytes yields exactly
/// `1.0`, so clients must clamp.
pub fn fraction_from_digest(digest: &[u8; 32]) -> f64 {
    let mut leading = [0u8; 8];
    leading.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(leading) as f64 / 2f64.powi(64)
}

/// Local time in ISO 8601 with microseconds and no offset.
pub fn iso_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
