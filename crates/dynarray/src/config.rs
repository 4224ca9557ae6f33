//! Growth configuration.

/// Capacity growth rule applied when a tail insertion finds the array full.
///
/// All values are compile-time constants; there is no per-instance tuning.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrowthPolicy;

impl GrowthPolicy {
    /// Multiplier applied to the current capacity on each growth step.
    pub const FACTOR: usize = 2;

    /// Capacity of the first allocation made by an empty array.
    pub const MIN_NON_ZERO_CAPACITY: usize = 1;

    /// Capacity to grow to from `current`: `max(1, 2 * current)`.
    ///
    /// Returns `None` if the multiplication overflows `usize`.
    pub fn next_capacity(current: usize) -> Option<usize> {
        current
            .checked_mul(Self::FACTOR)
            .map(|cap| cap.max(Self::MIN_NON_ZERO_CAPACITY))
    }
}
