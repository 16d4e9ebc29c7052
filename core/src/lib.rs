//! Spin Wheel core: item parsing, winner selection, segment colors, rotation
//! math and the presenters that drive the wheel and the number display.

pub mod config;
pub mod display;
pub mod fallback;
pub mod items;
pub mod notification;
pub mod palette;
pub mod presenter;
pub mod rotation;
pub mod winner;

pub use config::Config;
pub use config::ConfigError;
pub use config::ConfigOverrides;
pub use display::NumberDisplay;
pub use fallback::LocalRng;
pub use fallback::SystemRng;
pub use items::clean_items;
pub use items::parse_items;
pub use notification::Notification;
pub use notification::NotificationKind;
pub use notification::SourceStatus;
pub use notification::notification_for;
pub use palette::Palette;
pub use palette::SegmentColor;
pub use palette::assign_colors;
pub use presenter::SpinError;
pub use presenter::SpinOutcome;
pub use presenter::SpinPhase;
pub use presenter::SpinPlan;
pub use presenter::SpinPresenter;
pub use presenter::SpinSettings;
pub use winner::select_winner;
