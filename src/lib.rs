//! pxsort - a query-driven pixel sorter for glitch art
//!
//! Pixels along rows and/or columns are partitioned into contiguous runs
//! by a selection predicate and each run is independently sorted by a
//! scalar value derived from the pixel's channels. The transform is
//! driven by a small query language chaining one or more sort steps:
//!
//! ```text
//! SORT ROWS ASC BY AVG WITH DARK 45 RUNS THEN SORT COLS DESC BY MAX WITH FULL RUNS
//! ```

pub mod cli;
pub mod executor;
pub mod image;
pub mod observability;
pub mod pixel;
pub mod planner;
pub mod query;
