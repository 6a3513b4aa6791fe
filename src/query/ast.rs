//! Query AST structures
//!
//! Defines the parsed sort-step representation consumed by the planner.
//! Steps are immutable once parsed and execute strictly in declared order.

/// Whether a step's lines are the image's rows or its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Row,
    Column,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Row => "rows",
            Orientation::Column => "columns",
        }
    }
}

/// Sort direction within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// Scalar extractor used to derive the ordering key from a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Average,
    Product,
    Max,
    Min,
    Xor,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Average => "avg",
            Comparator::Product => "mul",
            Comparator::Max => "max",
            Comparator::Min => "min",
            Comparator::Xor => "xor",
        }
    }
}

/// Policy that partitions a line into independently sorted runs.
///
/// `Dark` and `Light` carry a threshold over the step's extractor value;
/// `Fixed` carries a chunk length. `Full` carries no parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPolicy {
    /// The whole line is one run.
    Full,
    /// Pixels with value <= threshold are skipped; maximal blocks of
    /// pixels with value > threshold are sorted.
    Dark(u32),
    /// Pixels with value < threshold are skipped; maximal blocks of
    /// pixels with value >= threshold are sorted.
    Light(u32),
    /// The line is chunked into consecutive runs of exactly this length
    /// (the final run may be shorter).
    Fixed(usize),
}

impl RunPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            RunPolicy::Full => "full",
            RunPolicy::Dark(_) => "dark",
            RunPolicy::Light(_) => "light",
            RunPolicy::Fixed(_) => "fixed",
        }
    }

    /// Returns the threshold or chunk-length parameter, if the policy
    /// carries one.
    pub fn param(&self) -> Option<u32> {
        match self {
            RunPolicy::Full => None,
            RunPolicy::Dark(t) | RunPolicy::Light(t) => Some(*t),
            RunPolicy::Fixed(n) => Some(*n as u32),
        }
    }
}

/// One fully-specified clause of the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStep {
    pub orientation: Orientation,
    pub direction: Direction,
    pub comparator: Comparator,
    pub run_policy: RunPolicy,
}

impl SortStep {
    /// Creates a step; mostly useful for programmatic construction in tests.
    pub fn new(
        orientation: Orientation,
        direction: Direction,
        comparator: Comparator,
        run_policy: RunPolicy,
    ) -> Self {
        Self {
            orientation,
            direction,
            comparator,
            run_policy,
        }
    }
}

/// A parsed query: a non-empty ordered sequence of sort steps.
///
/// Each step's output pixel arrangement is the next step's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub steps: Vec<SortStep>,
}

impl Query {
    /// Creates a query from a single step.
    pub fn single(step: SortStep) -> Self {
        Self { steps: vec![step] }
    }

    /// Appends a chained step.
    pub fn then(mut self, step: SortStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Number of steps in the query.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
