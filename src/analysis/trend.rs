//! Downward trend detection

use crate::charts::TimePoint;

/// Longest run of consecutive strict price decreases.
///
/// A run of `k` means `k` successive points each strictly below the one
/// before it. Equal prices end a run. Empty and single-point series give 0.
pub fn longest_decreasing_run(prices: &[TimePoint]) -> usize {
    let mut longest = 0;
    let mut current = 0;

    for pair in prices.windows(2) {
        if pair[1].value < pair[0].value {
            current += 1;
        } else {
            longest = longest.max(current);
            current = 0;
        }
    }

    longest.max(current)
}
