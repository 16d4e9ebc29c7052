//! Wheel rotation math.
//!
//! Segment `i` of `n` is drawn rotated by `i * 360 / n` degrees, and the
//! pointer sits at the top. Rotating the wheel by `360 - i * 360 / n` brings
//! segment `i` under the pointer.

use std::num::NonZeroUsize;
use std::time::Duration;

/// Extra full turns added to a spin so it visibly rotates before landing.
pub const FULL_ROTATIONS: u32 = 5;

/// How long the spin animation runs before the winner is revealed.
pub const SPIN_DURATION: Duration = Duration::from_millis(3000);

pub fn degrees_per_segment(count: NonZeroUsize) -> f64 {
    360.0 / count.get() as f64
}

/// Orientation at which `index` rests under the pointer, without extra turns.
pub fn resting_angle(index: usize, count: NonZeroUsize) -> f64 {
    360.0 - index as f64 * degrees_per_segment(count)
}

/// Angle to animate to: `full_rotations` turns plus the resting angle.
pub fn spin_target(index: usize, count: NonZeroUsize, full_rotations: u32) -> f64 {
    f64::from(full_rotations) * 360.0 + resting_angle(index, count)
}

/// Normalizes any angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Index of the segment under the pointer when the wheel is at `angle`.
pub fn segment_at(angle: f64, count: NonZeroUsize) -> usize {
    let per = degrees_per_segment(count);
    let offset = normalize_angle(360.0 - normalize_angle(angle));
    // Segments are centered on their angle, so shift by half a segment.
    let index = ((offset + per / 2.0) / per).floor() as usize;
    index % count.get()
}

/// Cubic ease-out, the terminal counterpart of a CSS `ease-out` transition.
pub fn ease_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Angle reached after `progress` (0..=1) of an animation from `from` to `to`.
pub fn angle_at(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * ease_out(progress)
}
