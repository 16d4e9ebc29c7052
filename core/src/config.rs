//! User configuration.
//!
//! Settings are layered: command-line overrides, then the
//! `SPINWHEEL_API_URL` environment variable (base URL only), then
//! `~/.spinwheel/config.toml`, then built-in defaults.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use dirs::home_dir;
use serde::Deserialize;
use spinwheel_branding::CONFIG_DIR_NAME;
use spinwheel_branding::CONFIG_FILE_NAME;
use spinwheel_branding::DEFAULT_API_BASE_URL;
use spinwheel_branding::ENV_VAR_API_URL;
use spinwheel_branding::ENV_VAR_HOME;
use spinwheel_rng_api::Provider;
use spinwheel_rng_api::Validation;
use thiserror::Error;
use tracing::debug;

use crate::palette::Palette;
use crate::palette::PaletteError;
use crate::presenter::SpinSettings;
use crate::rotation::FULL_ROTATIONS;
use crate::rotation::SPIN_DURATION;

/// Bound on a number display request before it is reported as timed out.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate the spinwheel home directory: {0}")]
    Home(#[source] std::io::Error),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    pub api_base_url: Option<String>,
    /// Number display request timeout. `0` waits indefinitely.
    pub request_timeout_ms: Option<u64>,
    /// Wheel request timeout. Unset waits indefinitely.
    pub wheel_timeout_ms: Option<u64>,
    pub spin_duration_ms: Option<u64>,
    pub full_rotations: Option<u32>,
    pub palette: Option<Vec<String>>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
    pub wheel_timeout: Option<Duration>,
    pub spin: SpinSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Some(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)),
            wheel_timeout: None,
            spin: SpinSettings::default(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the spinwheel home and applies the
    /// environment and `overrides` on top.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let home = find_spinwheel_home().map_err(ConfigError::Home)?;
        let toml = load_config_toml(&home)?;
        let env_api_url = std::env::var(ENV_VAR_API_URL).ok();
        Self::from_sources(toml, overrides, env_api_url)
    }

    pub fn from_sources(
        toml: ConfigToml,
        overrides: ConfigOverrides,
        env_api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = overrides
            .api_base_url
            .or(env_api_url.filter(|url| !url.trim().is_empty()))
            .or(toml.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let request_timeout_ms = overrides
            .request_timeout_ms
            .or(toml.request_timeout_ms)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        let palette = match toml.palette {
            Some(colors) => Palette::parse(&colors)?,
            None => Palette::default(),
        };

        Ok(Self {
            api_base_url,
            request_timeout: timeout_from_ms(request_timeout_ms),
            wheel_timeout: toml.wheel_timeout_ms.and_then(timeout_from_ms),
            spin: SpinSettings {
                spin_duration: toml
                    .spin_duration_ms
                    .map(Duration::from_millis)
                    .unwrap_or(SPIN_DURATION),
                full_rotations: toml.full_rotations.unwrap_or(FULL_ROTATIONS),
                palette,
            },
        })
    }

    /// Provider for the number display: strict payloads, bounded wait.
    pub fn display_provider(&self) -> Provider {
        Provider::new(&self.api_base_url)
            .with_timeout(self.request_timeout)
            .with_validation(Validation::Strict)
    }

    /// Provider for the wheel: lenient payloads, optional bound.
    pub fn wheel_provider(&self) -> Provider {
        Provider::new(&self.api_base_url)
            .with_timeout(self.wheel_timeout)
            .with_validation(Validation::Lenient)
    }
}

fn timeout_from_ms(ms: u64) -> Option<Duration> {
    (ms > 0).then_some(Duration::from_millis(ms))
}

/// Returns the spinwheel configuration directory, which can be specified by
/// the `SPINWHEEL_HOME` environment variable. If not set, defaults to
/// `~/.spinwheel`.
///
/// - If `SPINWHEEL_HOME` is set, the value will be canonicalized and this
///   function will Err if the path does not exist.
/// - If `SPINWHEEL_HOME` is not set, this function does not verify that the
///   directory exists.
pub fn find_spinwheel_home() -> std::io::Result<PathBuf> {
    resolve_home(std::env::var(ENV_VAR_HOME).ok())
}

fn resolve_home(env_home: Option<String>) -> std::io::Result<PathBuf> {
    if let Some(val) = env_home
        && !val.is_empty()
    {
        return PathBuf::from(val).canonicalize();
    }

    let mut p = home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not find home directory",
        )
    })?;
    p.push(CONFIG_DIR_NAME);
    Ok(p)
}

/// Reads `config.toml` from `home`. A missing file yields the defaults.
pub fn load_config_toml(home: &Path) -> Result<ConfigToml, ConfigError> {
    let path = home.join(CONFIG_FILE_NAME);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ConfigToml::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}
