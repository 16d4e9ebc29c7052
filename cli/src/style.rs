//! Colors for terminal output.
//!
//! Styling is applied only when stdout supports color. Segment colors use
//! 24-bit escapes when available and otherwise print uncolored.

use owo_colors::OwoColorize;
use spinwheel_core::SegmentColor;
use spinwheel_core::SourceStatus;
use supports_color::Stream;

/// Status dot for genuine hardware randomness.
const STATUS_HARDWARE: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
/// Status dot for the backend's software fallback.
const STATUS_FALLBACK: (u8, u8, u8) = (0xf9, 0x73, 0x16);

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Styler {
    color: bool,
    truecolor: bool,
}

impl Styler {
    pub(crate) fn for_stdout() -> Self {
        match supports_color::on_cached(Stream::Stdout) {
            Some(level) => Self {
                color: level.has_basic,
                truecolor: level.has_16m,
            },
            None => Self::default(),
        }
    }

    pub(crate) fn segment(&self, text: &str, color: SegmentColor) -> String {
        if self.truecolor {
            text.on_truecolor(color.r, color.g, color.b)
                .black()
                .to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn status_dot(&self, status: SourceStatus) -> String {
        let dot = "●";
        if !self.color {
            return dot.to_string();
        }
        match status {
            SourceStatus::Hardware if self.truecolor => {
                let (r, g, b) = STATUS_HARDWARE;
                dot.truecolor(r, g, b).to_string()
            }
            SourceStatus::BackendFallback if self.truecolor => {
                let (r, g, b) = STATUS_FALLBACK;
                dot.truecolor(r, g, b).to_string()
            }
            SourceStatus::Hardware => dot.green().to_string(),
            SourceStatus::BackendFallback => dot.yellow().to_string(),
            SourceStatus::Other => dot.bright_black().to_string(),
        }
    }

    pub(crate) fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
