use std::time::Duration;

use spinwheel_branding::DEFAULT_API_BASE_URL;

use crate::sample::Validation;

/// Where the random source lives and how strictly its answers are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub base_url: String,
    /// Upper bound for the whole request, body included. `None` waits forever.
    pub timeout: Option<Duration>,
    pub validation: Validation,
}

impl Provider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            validation: Validation::Strict,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn url_for_path(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
