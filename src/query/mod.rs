//! Query language subsystem for pxsort
//!
//! A query is an ordered chain of sort steps:
//!
//! ```text
//! SORT <ROWS|COLS> <ASC|DESC> BY <AVG|MUL|MAX|MIN|XOR>
//!      WITH <FULL | DARK <n> | LIGHT <n> | FIXED <n>> RUNS
//!      [THEN <next step...>]
//! ```
//!
//! Keywords are case-sensitive and matched exactly; there are no synonyms.
//!
//! # Design Principles
//!
//! - Deterministic: the same query string always produces the same steps,
//!   and the same malformed input always fails at the same token position
//! - Fail fast: the first grammar violation aborts the whole parse, there
//!   is no recovery and no partial query
//! - Pure: parsing has no side effects beyond its return value

mod ast;
mod errors;
mod parser;
mod tokens;

pub use ast::{Comparator, Direction, Orientation, Query, RunPolicy, SortStep};
pub use errors::{ParseError, ParseErrorCode, ParseResult};
pub use parser::{parse, QueryParser};
pub use tokens::{tokenize, Keyword};
