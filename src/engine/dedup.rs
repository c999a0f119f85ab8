use crate::RigCode;
use std::collections::HashSet;

/// Keep the first occurrence of each code, preserving order.
pub(crate) fn dedup_first_seen(codes: &[RigCode]) -> Vec<RigCode> {
    let mut seen = HashSet::new();
    codes.iter().copied().filter(|c| seen.insert(*c)).collect()
}
