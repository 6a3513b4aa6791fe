//! Query execution
//!
//! Orchestrates the full pipeline for a parsed query: validate, then for
//! each step compile a plan, acquire the pixel view, sort every run, and
//! commit the view back to the image.

use super::runs::segment_line;
use super::view::PixelView;
use crate::image::Image;
use crate::planner::{PlannerResult, SortPlan, SortPlanner};
use crate::query::Query;

/// Executes parsed queries against an image.
pub struct QueryExecutor;

impl QueryExecutor {
    /// Runs every step of the query against the image, in declared order.
    ///
    /// The whole query is validated before the first pixel is touched; a
    /// bad query leaves the image unmodified. Plans themselves are built
    /// per step and discarded after it.
    pub fn execute(image: &mut Image, query: &Query) -> PlannerResult<()> {
        SortPlanner::validate(image, query)?;

        for (step_index, step) in query.steps.iter().enumerate() {
            let plan = SortPlanner::plan(image, step, step_index)?;
            Self::execute_step(image, &plan);
        }

        Ok(())
    }

    /// Runs one compiled step.
    fn execute_step(image: &mut Image, plan: &SortPlan) {
        let mut view = PixelView::acquire(image, plan.orientation);
        for line in view.lines_mut() {
            segment_line(plan, line);
        }
        view.commit(image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use crate::query::parse;

    fn image_from_pixels(width: usize, height: usize, pixels: &[Pixel]) -> Image {
        assert_eq!(pixels.len(), width * height);
        let mut bytes = Vec::with_capacity(pixels.len() * 3);
        for p in pixels {
            bytes.extend_from_slice(&[p.r, p.g, p.b]);
        }
        Image::from_raw(width, height, 3, bytes).unwrap()
    }

    fn row_averages(image: &Image, row: usize) -> Vec<u32> {
        let width = image.width();
        (0..width)
            .map(|col| {
                let offset = (row * width + col) * 3;
                let b = image.buffer();
                Pixel::new(b[offset], b[offset + 1], b[offset + 2]).average()
            })
            .collect()
    }

    fn gray(v: u8) -> Pixel {
        Pixel::new(v, v, v)
    }

    #[test]
    fn test_rows_sort_independently() {
        let mut img = image_from_pixels(
            3,
            2,
            &[gray(9), gray(1), gray(5), gray(4), gray(8), gray(2)],
        );
        let query = parse("SORT ROWS ASC BY AVG WITH FULL RUNS").unwrap();

        QueryExecutor::execute(&mut img, &query).unwrap();

        assert_eq!(row_averages(&img, 0), vec![1, 5, 9]);
        assert_eq!(row_averages(&img, 1), vec![2, 4, 8]);
    }

    #[test]
    fn test_column_sort_writes_back_row_major() {
        // 2x2: columns are [10, 200] and [90, 30]
        let mut img = image_from_pixels(2, 2, &[gray(10), gray(90), gray(200), gray(30)]);
        let query = parse("SORT COLS DESC BY MAX WITH FULL RUNS").unwrap();

        QueryExecutor::execute(&mut img, &query).unwrap();

        // Each column sorted descending by max channel
        assert_eq!(row_averages(&img, 0), vec![200, 90]);
        assert_eq!(row_averages(&img, 1), vec![10, 30]);
    }

    #[test]
    fn test_steps_chain_in_declared_order() {
        let mut img = image_from_pixels(2, 2, &[gray(40), gray(10), gray(20), gray(30)]);
        let query = parse(
            "SORT ROWS ASC BY AVG WITH FULL RUNS THEN SORT COLS DESC BY AVG WITH FULL RUNS",
        )
        .unwrap();

        QueryExecutor::execute(&mut img, &query).unwrap();

        // After row sort: [10, 40] / [20, 30]; after column sort desc:
        // columns [20, 10] and [40, 30]
        assert_eq!(row_averages(&img, 0), vec![20, 40]);
        assert_eq!(row_averages(&img, 1), vec![10, 30]);
    }

    #[test]
    fn test_bad_channel_count_leaves_image_untouched() {
        let mut img = Image::from_raw(2, 1, 4, vec![7; 8]).unwrap();
        let query = parse("SORT ROWS ASC BY AVG WITH FULL RUNS").unwrap();

        let err = QueryExecutor::execute(&mut img, &query).unwrap_err();
        assert_eq!(err.step(), 0);
        assert_eq!(img.buffer(), &[7; 8][..]);
    }
}
