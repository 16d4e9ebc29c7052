use std::num::NonZeroUsize;

/// Maps a random fraction onto an index in `[0, count)`.
///
/// `rand` is expected in `[0, 1)`. Sources can return exactly `1.0` (hashing
/// and float rounding make it possible), so anything `>= 1.0` is clamped to the
/// last index. Under a uniform `rand` every index is equally likely, except
/// that the last index also absorbs that single boundary value: a vanishingly
/// small bias that is accepted, not corrected.
///
/// Negative and NaN inputs land on index 0 because the float-to-integer cast
/// saturates.
pub fn select_winner(rand: f64, count: NonZeroUsize) -> usize {
    let count = count.get();
    if rand >= 1.0 {
        return count - 1;
    }
    // `floor(rand * count)` cannot exceed `count - 1` for `rand < 1` except
    // through rounding of very large counts; `min` keeps the result in range.
    ((rand * count as f64).floor() as usize).min(count - 1)
}
