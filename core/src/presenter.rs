//! State owner for the lottery wheel.
//!
//! A spin moves through `Idle → Loading → Spinning → Settled`. The trigger is
//! only available in `Idle` and `Settled`, so a second spin cannot start while
//! one is in flight. Source failures never surface as errors here: the
//! presenter substitutes a local fraction and changes its RNG mode label.

use std::num::NonZeroUsize;
use std::time::Duration;

use spinwheel_branding::SOURCE_LOCAL_FALLBACK;
use spinwheel_rng_api::RandomSample;
use spinwheel_rng_api::RandomSource;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::fallback::LocalRng;
use crate::fallback::SystemRng;
use crate::items::clean_items;
use crate::items::parse_items;
use crate::notification::SourceStatus;
use crate::palette::Palette;
use crate::palette::SegmentColor;
use crate::palette::assign_colors;
use crate::rotation::FULL_ROTATIONS;
use crate::rotation::SPIN_DURATION;
use crate::rotation::resting_angle;
use crate::rotation::spin_target;
use crate::winner::select_winner;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinError {
    #[error("a spin is already in progress")]
    AlreadySpinning,
    #[error("enter at least one item before spinning")]
    NoItems,
    #[error("cannot {action} while the wheel is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinPhase {
    Idle,
    Loading,
    Spinning {
        winner_index: usize,
        target_angle: f64,
    },
    Settled {
        winner_index: usize,
    },
}

impl SpinPhase {
    fn name(&self) -> &'static str {
        match self {
            SpinPhase::Idle => "idle",
            SpinPhase::Loading => "loading",
            SpinPhase::Spinning { .. } => "spinning",
            SpinPhase::Settled { .. } => "settled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinSettings {
    pub spin_duration: Duration,
    pub full_rotations: u32,
    pub palette: Palette,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            spin_duration: SPIN_DURATION,
            full_rotations: FULL_ROTATIONS,
            palette: Palette::default(),
        }
    }
}

/// Everything a front-end needs to animate one spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub winner: String,
    pub from_angle: f64,
    pub target_angle: f64,
    pub resting_angle: f64,
    pub duration: Duration,
    pub sample: RandomSample,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner: String,
    pub source: String,
}

pub struct SpinPresenter<S, R = SystemRng> {
    source: S,
    local_rng: R,
    settings: SpinSettings,
    input: String,
    items: Vec<String>,
    phase: SpinPhase,
    rng_mode: String,
    winner: Option<String>,
    angle: f64,
    /// Items captured when the current spin started.
    spin_items: Vec<String>,
}

impl<S: RandomSource> SpinPresenter<S> {
    pub fn new(source: S, settings: SpinSettings) -> Self {
        SpinPresenter {
            source,
            local_rng: SystemRng,
            settings,
            input: String::new(),
            items: Vec::new(),
            phase: SpinPhase::Idle,
            rng_mode: SOURCE_LOCAL_FALLBACK.to_string(),
            winner: None,
            angle: 0.0,
            spin_items: Vec::new(),
        }
    }
}

impl<S: RandomSource, R: LocalRng> SpinPresenter<S, R> {
    pub fn with_local_rng<R2: LocalRng>(self, local_rng: R2) -> SpinPresenter<S, R2> {
        SpinPresenter {
            source: self.source,
            local_rng,
            settings: self.settings,
            input: self.input,
            items: self.items,
            phase: self.phase,
            rng_mode: self.rng_mode,
            winner: self.winner,
            angle: self.angle,
            spin_items: self.spin_items,
        }
    }

    /// Replaces the item list with the lines of `text`.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.items = parse_items(&self.input);
    }

    /// Replaces the item list with already separated entries.
    pub fn set_items<I>(&mut self, entries: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.items = clean_items(entries);
        self.input = self.items.join("\n");
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn items(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn colors(&self) -> Vec<SegmentColor> {
        assign_colors(&self.items(), &self.settings.palette)
    }

    pub fn settings(&self) -> &SpinSettings {
        &self.settings
    }

    pub fn phase(&self) -> &SpinPhase {
        &self.phase
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Loading | SpinPhase::Spinning { .. })
    }

    /// Whether the trigger control is enabled.
    pub fn can_spin(&self) -> bool {
        !self.is_spinning()
    }

    pub fn rng_mode(&self) -> &str {
        &self.rng_mode
    }

    pub fn source_status(&self) -> SourceStatus {
        SourceStatus::from_label(&self.rng_mode)
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Current resting orientation of the wheel in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Starts a spin: clears the previous winner and disables the trigger.
    pub fn begin_spin(&mut self) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::AlreadySpinning);
        }
        let items = self.items();
        if items.is_empty() {
            return Err(SpinError::NoItems);
        }
        debug!(items = items.len(), "spin started");
        self.spin_items = items;
        self.winner = None;
        self.phase = SpinPhase::Loading;
        Ok(())
    }

    /// Fetches a fraction, substituting a local one if the source fails.
    pub async fn resolve_sample(&self) -> RandomSample {
        match self.source.fetch().await {
            Ok(sample) => sample,
            Err(err) => {
                warn!(error = %err, "random source unavailable, using local fallback");
                self.local_rng.fallback_sample()
            }
        }
    }

    /// Picks the winner for `sample` and computes the rotation to animate.
    pub fn apply_sample(&mut self, sample: RandomSample) -> Result<SpinPlan, SpinError> {
        if self.phase != SpinPhase::Loading {
            return Err(self.invalid("apply a sample"));
        }
        let Some(count) = NonZeroUsize::new(self.spin_items.len()) else {
            return Err(SpinError::NoItems);
        };

        self.rng_mode = sample.source.clone();
        let winner_index = select_winner(sample.value, count);
        let target_angle = spin_target(winner_index, count, self.settings.full_rotations);
        let winner = self.spin_items[winner_index].clone();
        debug!(
            value = sample.value,
            source = %sample.source,
            winner_index,
            target_angle,
            "spin resolved"
        );

        self.phase = SpinPhase::Spinning {
            winner_index,
            target_angle,
        };
        Ok(SpinPlan {
            winner_index,
            winner,
            from_angle: self.angle,
            target_angle,
            resting_angle: resting_angle(winner_index, count),
            duration: self.settings.spin_duration,
            sample,
        })
    }

    /// Ends the animation: snaps to the resting angle, reveals the winner and
    /// re-enables the trigger.
    pub fn settle(&mut self) -> Result<String, SpinError> {
        let SpinPhase::Spinning { winner_index, .. } = self.phase else {
            return Err(self.invalid("settle"));
        };
        let Some(count) = NonZeroUsize::new(self.spin_items.len()) else {
            return Err(SpinError::NoItems);
        };
        let winner = self.spin_items[winner_index].clone();
        self.angle = resting_angle(winner_index, count);
        self.winner = Some(winner.clone());
        self.phase = SpinPhase::Settled { winner_index };
        debug!(%winner, "spin settled");
        Ok(winner)
    }

    /// Abandons an unfinished spin and re-enables the trigger. The wheel keeps
    /// its last resting angle and no winner is shown.
    pub fn cancel_spin(&mut self) {
        if !self.is_spinning() {
            return;
        }
        debug!(phase = self.phase.name(), "spin cancelled");
        self.phase = SpinPhase::Idle;
        self.spin_items.clear();
    }

    /// Runs a whole spin, waiting out the animation before revealing the
    /// winner. Dropping the future before it completes cancels the spin.
    pub async fn spin(&mut self) -> Result<SpinOutcome, SpinError> {
        self.begin_spin()?;
        let mut guard = SpinGuard {
            presenter: self,
            finished: false,
        };
        let sample = guard.presenter.resolve_sample().await;
        let plan = guard.presenter.apply_sample(sample)?;
        tokio::time::sleep(plan.duration).await;
        let winner = guard.presenter.settle()?;
        guard.finished = true;
        Ok(SpinOutcome {
            winner_index: plan.winner_index,
            winner,
            source: plan.sample.source,
        })
    }

    fn invalid(&self, action: &'static str) -> SpinError {
        SpinError::InvalidTransition {
            action,
            phase: self.phase.name(),
        }
    }
}

/// Cancels the spin it guards unless it reached `settle`.
struct SpinGuard<'a, S: RandomSource, R: LocalRng> {
    presenter: &'a mut SpinPresenter<S, R>,
    finished: bool,
}

impl<S: RandomSource, R: LocalRng> Drop for SpinGuard<'_, S, R> {
    fn drop(&mut self) {
        if !self.finished {
            self.presenter.cancel_spin();
        }
    }
}
