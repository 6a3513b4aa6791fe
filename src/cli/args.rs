//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// pxsort - a query-driven pixel sorter for glitch art
#[derive(Parser, Debug)]
#[command(name = "pxsort")]
#[command(version, about)]
#[command(long_about = "pxsort - a query-driven pixel sorter for glitch art\n\n\
    Query syntax:\n  \
    SORT <ROWS|COLS> <ASC|DESC> BY <AVG|MUL|MAX|MIN|XOR> \
    WITH <FULL|DARK <n>|LIGHT <n>|FIXED <n>> RUNS [THEN ...]")]
pub struct Cli {
    /// Source image path
    pub source: PathBuf,

    /// Destination image path
    pub destination: PathBuf,

    /// Pixel sort query, e.g. "SORT ROWS ASC BY AVG WITH DARK 45 RUNS"
    pub query: String,

    /// Emit step-by-step diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::parse_from([
            "pxsort",
            "in.png",
            "out.png",
            "SORT ROWS ASC BY AVG WITH FULL RUNS",
        ]);
        assert_eq!(cli.source, PathBuf::from("in.png"));
        assert_eq!(cli.destination, PathBuf::from("out.png"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::parse_from(["pxsort", "a", "b", "q", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["pxsort", "in.png", "out.png"]).is_err());
    }
}
