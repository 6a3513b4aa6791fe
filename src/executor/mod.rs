//! Sort executor subsystem for pxsort
//!
//! Consumes plans and mutates the image, one step at a time.
//!
//! # Execution Flow (strict order)
//!
//! 1. Validate every step of the query before the first pixel is touched
//! 2. For each step: compile its plan
//! 3. Acquire an orientation-ordered pixel view of the image
//! 4. Partition each line into runs and sort each run in place
//! 5. Commit the view back to the row-major image buffer
//!
//! Steps execute strictly sequentially: each step's output arrangement is
//! the next step's input. Within a step, lines touch disjoint pixel
//! ranges.

mod executor;
mod runs;
mod view;

pub use executor::QueryExecutor;
pub use runs::segment_line;
pub use view::PixelView;
