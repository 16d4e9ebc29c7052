//! Spin Wheel branding and configuration constants.
//!
//! This module centralizes names, environment variables and well-known source
//! labels so the client, the reference backend and the CLI agree on them.
//!
//! ## Source labels
//!
//! The backend reports where a fraction came from. `"microphone"` marks a
//! hardware-derived value, `"fallback"` marks the backend's own software RNG.
//! When the backend cannot be reached at all, the wheel generates a value
//! locally and reports [`SOURCE_LOCAL_FALLBACK`] instead.

/// The application name used in user-facing messages and documentation.
pub const APP_NAME: &str = "Spin Wheel";

/// The short application name used in CLI and logs.
pub const APP_NAME_SHORT: &str = "spinwheel";

/// The configuration directory name. The actual directory will be `~/.spinwheel/`.
pub const CONFIG_DIR_NAME: &str = ".spinwheel";

/// Name of the config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable to override the configuration directory location.
pub const ENV_VAR_HOME: &str = "SPINWHEEL_HOME";

/// Environment variable to override the random source base URL.
pub const ENV_VAR_API_URL: &str = "SPINWHEEL_API_URL";

/// User agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("spinwheel/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Random source
// ============================================================================

/// Default base URL of the random source (local loopback).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the random fraction endpoint, relative to the base URL.
pub const RANDOM_ENDPOINT_PATH: &str = "api/random";

/// Label the backend reports for hardware-derived fractions.
pub const SOURCE_MICROPHONE: &str = "microphone";

/// Label the backend reports when it fell back to its software RNG.
pub const SOURCE_FALLBACK: &str = "fallback";

/// Label used when the backend was unusable and the fraction was generated
/// locally.
pub const SOURCE_LOCAL_FALLBACK: &str = "api unused";

/// Label substituted when a lenient response omits its source.
pub const SOURCE_UNKNOWN: &str = "unknown";
