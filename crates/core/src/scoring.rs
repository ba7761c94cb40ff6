//! Scoring module - points for line clears
//!
//! A commit that clears `n` lines scores `LINE_SCORE_BASE * n(n+1)/2`: the k-th
//! line of the same commit is worth k times the base. Clearing lines together
//! always beats clearing the same lines across separate commits.

use crate::types::LINE_SCORE_BASE;

/// Points for clearing `lines` full lines in a single commit
pub fn calculate_line_score(lines: u32) -> u64 {
    let n = lines as u64;
    LINE_SCORE_BASE * n * (n + 1) / 2
}
