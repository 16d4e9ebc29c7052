use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use spinwheel_branding::SOURCE_MICROPHONE;

/// Number of raw bytes hashed into one fraction.
pub const SAMPLE_BYTES: usize = 4;

/// A blocking source of physical randomness.
pub trait EntropySource: Send + Sync {
    /// Label reported to clients for fractions derived from this source.
    fn label(&self) -> &str;

    /// Fills `buf` completely or fails.
    fn read_sample(&self, buf: &mut [u8]) -> std::io::Result<()>;
}

/// Reads raw bytes from a device node or pipe, such as an audio capture
/// stream or a hardware RNG.
#[derive(Debug, Clone)]
pub struct DeviceEntropy {
    path: PathBuf,
    label: String,
}

impl DeviceEntropy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            label: SOURCE_MICROPHONE.to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl EntropySource for DeviceEntropy {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_sample(&self, buf: &mut [u8]) -> std::io::Result<()> {
        // Reopened per sample so an unplugged device recovers once it returns.
        File::open(&self.path)?.read_exact(buf)
    }
}
