//! Sort plan compilation
//!
//! A plan binds one sort step to the image geometry. Geometry swaps with
//! orientation: row steps treat each image row as a line, column steps
//! treat each column as a line.
//!
//! Descending order inverts the comparison, not the extracted value, so
//! ties remain ties under inversion.

use std::cmp::Ordering;

use super::errors::{PlannerError, PlannerResult};
use crate::image::Image;
use crate::pixel::{Pixel, CHANNELS};
use crate::query::{Comparator, Direction, Orientation, Query, RunPolicy, SortStep};

/// Executable plan for one sort step.
///
/// Created immediately before a step executes, discarded immediately
/// after. Borrows nothing; all fields are resolved values.
#[derive(Debug, Clone, Copy)]
pub struct SortPlan {
    pub orientation: Orientation,
    pub direction: Direction,
    pub comparator: Comparator,
    pub run_policy: RunPolicy,
    /// Pixels per line: image width for rows, height for columns.
    pub run_length: usize,
    /// Number of lines: image height for rows, width for columns.
    pub run_count: usize,
}

impl SortPlan {
    /// Extracts the ordering key for a pixel under this plan's comparator.
    pub fn key(&self, pixel: Pixel) -> u32 {
        match self.comparator {
            Comparator::Average => pixel.average(),
            Comparator::Product => pixel.product(),
            Comparator::Max => pixel.max_channel(),
            Comparator::Min => pixel.min_channel(),
            Comparator::Xor => pixel.xor(),
        }
    }

    /// Direction-aware total order over pixels.
    pub fn compare(&self, a: Pixel, b: Pixel) -> Ordering {
        let ordering = self.key(a).cmp(&self.key(b));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Compiles sort steps into plans.
pub struct SortPlanner;

impl SortPlanner {
    /// Compiles one step against the image geometry.
    ///
    /// Pure function: same step and dimensions always produce the same
    /// plan. `step_index` is carried for error reporting only.
    pub fn plan(image: &Image, step: &SortStep, step_index: usize) -> PlannerResult<SortPlan> {
        Self::validate_step(image, step, step_index)?;

        let (run_length, run_count) = match step.orientation {
            Orientation::Row => (image.width(), image.height()),
            Orientation::Column => (image.height(), image.width()),
        };

        Ok(SortPlan {
            orientation: step.orientation,
            direction: step.direction,
            comparator: step.comparator,
            run_policy: step.run_policy,
            run_length,
            run_count,
        })
    }

    /// Validates every step of a query up front, before any pixel work.
    pub fn validate(image: &Image, query: &Query) -> PlannerResult<()> {
        for (step_index, step) in query.steps.iter().enumerate() {
            Self::validate_step(image, step, step_index)?;
        }
        Ok(())
    }

    fn validate_step(image: &Image, step: &SortStep, step_index: usize) -> PlannerResult<()> {
        if image.channels() != CHANNELS {
            return Err(PlannerError::unsupported_channels(
                step_index,
                image.channels(),
            ));
        }
        // The parser already enforces this for textual queries; steps built
        // programmatically still have to pass through it.
        if let RunPolicy::Fixed(n) = step.run_policy {
            if n < 1 {
                return Err(PlannerError::invalid_run_length(step_index));
            }
        }
        Ok(())
    }
}
