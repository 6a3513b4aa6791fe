//! CLI command implementation
//!
//! Runs the whole pipeline for one invocation: parse the query, decode
//! the source, execute every step, encode the destination. Any failure
//! is terminal; the destination file is only written after every step
//! has completed.

use crate::executor::QueryExecutor;
use crate::image::{read_image, write_image};
use crate::observability::Logger;
use crate::query::{parse, SortStep};

use super::args::Cli;
use super::errors::CliResult;

/// Parses arguments and runs the pipeline.
pub fn run() -> CliResult<()> {
    run_with(Cli::parse_args())
}

/// Runs the pipeline for already-parsed arguments.
pub fn run_with(cli: Cli) -> CliResult<()> {
    let query = parse(&cli.query)?;
    if cli.verbose {
        let steps = query.len().to_string();
        Logger::info(
            "QUERY_PARSED",
            &[("steps", steps.as_str()), ("query", cli.query.as_str())],
        );
        for (index, step) in query.steps.iter().enumerate() {
            trace_step(index, step);
        }
    }

    let mut image = read_image(&cli.source)?;
    if cli.verbose {
        let width = image.width().to_string();
        let height = image.height().to_string();
        let source = cli.source.display().to_string();
        Logger::info(
            "IMAGE_LOADED",
            &[
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("source", source.as_str()),
            ],
        );
    }

    QueryExecutor::execute(&mut image, &query)?;

    write_image(&image, &cli.destination)?;
    if cli.verbose {
        let destination = cli.destination.display().to_string();
        Logger::info("IMAGE_WRITTEN", &[("destination", destination.as_str())]);
    }

    Ok(())
}

/// Dumps one step's resolved fields.
fn trace_step(index: usize, step: &SortStep) {
    let index = index.to_string();
    let param = step
        .run_policy
        .param()
        .map(|p| p.to_string())
        .unwrap_or_default();
    Logger::trace(
        "STEP_PLANNED",
        &[
            ("step", index.as_str()),
            ("orientation", step.orientation.as_str()),
            ("direction", step.direction.as_str()),
            ("comparator", step.comparator.as_str()),
            ("run_policy", step.run_policy.name()),
            ("param", param.as_str()),
        ],
    );
}
