//! State owner for the number display: one button, one fraction, one status
//! indicator.

use spinwheel_branding::SOURCE_FALLBACK;
use spinwheel_rng_api::RandomSample;
use spinwheel_rng_api::RandomSource;
use tracing::warn;

use crate::notification::Notification;
use crate::notification::SourceStatus;
use crate::notification::notification_for;

/// Decimal places used when rendering a fraction.
pub const DISPLAY_PRECISION: usize = 9;

pub struct NumberDisplay<S> {
    source: S,
    sample: Option<RandomSample>,
    source_label: String,
    loading: bool,
}

impl<S: RandomSource> NumberDisplay<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sample: None,
            source_label: SOURCE_FALLBACK.to_string(),
            loading: false,
        }
    }

    /// Fetches a new fraction. On failure the previous value stays on screen
    /// and the returned notification names the cause.
    ///
    /// Dropping the returned future mid-fetch also clears the loading flag.
    pub async fn pick(&mut self) -> Result<&RandomSample, Notification> {
        let loading = LoadingGuard::new(&mut self.loading);
        let result = self.source.fetch().await;
        drop(loading);

        match result {
            Ok(sample) => {
                self.source_label = sample.source.clone();
                Ok(self.sample.insert(sample))
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch random number");
                Err(notification_for(&err, &self.source.location()))
            }
        }
    }

    pub fn sample(&self) -> Option<&RandomSample> {
        self.sample.as_ref()
    }

    pub fn formatted_value(&self) -> Option<String> {
        self.sample
            .as_ref()
            .map(|sample| format!("{:.prec$}", sample.value, prec = DISPLAY_PRECISION))
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_pick(&self) -> bool {
        !self.loading
    }

    /// Hardware-derived values count as genuine; everything else is shown as
    /// fallback.
    pub fn status(&self) -> SourceStatus {
        match SourceStatus::from_label(&self.source_label) {
            SourceStatus::Hardware => SourceStatus::Hardware,
            SourceStatus::BackendFallback | SourceStatus::Other => SourceStatus::BackendFallback,
        }
    }

    pub fn indicator_text(&self) -> &'static str {
        match self.status() {
            SourceStatus::Hardware => "Microphone",
            SourceStatus::BackendFallback | SourceStatus::Other => "Fallback",
        }
    }
}

/// Holds the loading flag up until dropped.
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
