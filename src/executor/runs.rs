//! Run segmentation
//!
//! Partitions one line of pixels into maximal runs under the plan's run
//! policy and sorts each run in place. All policies scan left to right;
//! the cursor only ever advances, so every pixel is visited exactly once.
//!
//! Boundary rules:
//! - Full: the whole line is one run
//! - Dark(t): skip pixels with value <= t, sort maximal blocks with
//!   value > t
//! - Light(t): skip pixels with value < t, sort maximal blocks with
//!   value >= t
//! - Fixed(n): consecutive chunks of exactly n pixels, the last possibly
//!   shorter

use crate::pixel::Pixel;
use crate::planner::SortPlan;
use crate::query::RunPolicy;

/// Segments one line into runs and sorts each run in place.
pub fn segment_line(plan: &SortPlan, line: &mut [Pixel]) {
    match plan.run_policy {
        RunPolicy::Full => sort_run(plan, line),
        RunPolicy::Dark(threshold) => {
            segment_by_threshold(plan, line, |value| value > threshold)
        }
        RunPolicy::Light(threshold) => {
            segment_by_threshold(plan, line, |value| value >= threshold)
        }
        RunPolicy::Fixed(length) => {
            for chunk in line.chunks_mut(length) {
                sort_run(plan, chunk);
            }
        }
    }
}

/// Alternates between skipping pixels outside the run predicate and
/// sorting the maximal block of pixels inside it.
fn segment_by_threshold<F>(plan: &SortPlan, line: &mut [Pixel], in_run: F)
where
    F: Fn(u32) -> bool,
{
    let mut cursor = 0;
    while cursor < line.len() {
        let start = next_match(plan, line, cursor, &in_run);
        let end = next_match(plan, line, start, |value| !in_run(value));
        sort_run(plan, &mut line[start..end]);
        // end > start whenever start is in bounds, so the cursor always
        // advances
        cursor = end;
    }
}

/// First index at or after `from` whose extractor value matches `pred`,
/// or the line length if none does.
fn next_match<F>(plan: &SortPlan, line: &[Pixel], from: usize, pred: F) -> usize
where
    F: Fn(u32) -> bool,
{
    line[from..]
        .iter()
        .position(|pixel| pred(plan.key(*pixel)))
        .map_or(line.len(), |offset| from + offset)
}

/// Sorts one run with the plan's direction-aware comparator.
///
/// Runs of length 0 or 1 are trivially sorted. Stability is not required;
/// ties may reorder.
fn sort_run(plan: &SortPlan, run: &mut [Pixel]) {
    run.sort_unstable_by(|a, b| plan.compare(*a, *b));
}
