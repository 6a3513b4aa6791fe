//! Sort planner subsystem for pxsort
//!
//! Compiles one parsed sort step plus the image geometry into an
//! executable sort plan: line length and line count for the step's
//! orientation, a direction-aware comparator, and the resolved
//! run-boundary policy.
//!
//! # Design Principles
//!
//! - Pure: planning never mutates the image or the step
//! - Ephemeral: a plan is built immediately before a step executes and
//!   discarded immediately after
//! - Strict: any channel count other than 3 is a configuration error
//!   raised before pixel work begins

mod errors;
mod plan;

pub use errors::{PlannerError, PlannerErrorCode, PlannerResult};
pub use plan::{SortPlan, SortPlanner};
