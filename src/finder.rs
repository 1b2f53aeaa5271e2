//! Contains the single-pass scan that locates two entries summing to a target.

use serde::Serialize;
use std::collections::HashMap;

/// A pair of distinct indices whose values sum to the requested target.
///
/// `first` is always strictly less than `second`: the first component was
/// recorded in the lookup table before the scan reached the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

/// Scans `nums` once and returns the first pair of distinct indices whose
/// values sum to `target`, or `None` when no such pair exists.
///
/// Each step checks the lookup table for the current value's complement
/// before recording the value itself, so an element never pairs with its own
/// index. Duplicate values overwrite their table entry, leaving the most
/// recent occurrence as the candidate for later matches.
pub fn find_pair(nums: &[i64], target: i64) -> Option<Pair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &num) in nums.iter().enumerate() {
        // A complement outside the i64 domain cannot occur in `nums`.
        if let Some(complement) = target.checked_sub(num) {
            if let Some(&first) = seen.get(&complement) {
                return Some(Pair { first, second: i });
            }
        }
        seen.insert(num, i);
    }

    None
}
