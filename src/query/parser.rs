//! Query parser
//!
//! Strict left-to-right, single-pass consumption of the token stream. At
//! each grammar position the next token must equal (or, for numeric
//! parameters, parse as) the expected value; the first mismatch is a
//! terminal failure. No backtracking, no recovery.

use super::ast::{Comparator, Direction, Orientation, Query, RunPolicy, SortStep};
use super::errors::{ParseError, ParseResult};
use super::tokens::{tokenize, Keyword};

/// Parses a query string into an ordered sequence of sort steps.
///
/// Convenience wrapper over [`QueryParser`].
pub fn parse(input: &str) -> ParseResult<Query> {
    QueryParser::new(input).parse()
}

/// Single-pass parser over a tokenized query string.
pub struct QueryParser<'a> {
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> QueryParser<'a> {
    /// Tokenizes the input and positions the cursor at the first token.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: tokenize(input),
            cursor: 0,
        }
    }

    /// Consumes the parser and produces the step sequence.
    ///
    /// Deterministic: identical input always yields identical steps, and
    /// identical malformed input always fails at the same token position.
    pub fn parse(mut self) -> ParseResult<Query> {
        if self.tokens.is_empty() {
            return Err(ParseError::empty_query());
        }

        let mut steps = Vec::new();
        loop {
            steps.push(self.parse_step()?);

            if self.at_end() {
                break;
            }

            // Anything after a complete step must chain with THEN, and a
            // dangling THEN with no following step is premature end-of-input.
            self.expect_keyword(Keyword::Then)?;
        }

        Ok(Query { steps })
    }

    /// Parses one `SORT ... RUNS` clause.
    fn parse_step(&mut self) -> ParseResult<SortStep> {
        self.expect_keyword(Keyword::Sort)?;
        let orientation = self.parse_orientation()?;
        let direction = self.parse_direction()?;
        self.expect_keyword(Keyword::By)?;
        let comparator = self.parse_comparator()?;
        self.expect_keyword(Keyword::With)?;
        let run_policy = self.parse_run_policy()?;
        self.expect_keyword(Keyword::Runs)?;

        Ok(SortStep {
            orientation,
            direction,
            comparator,
            run_policy,
        })
    }

    fn parse_orientation(&mut self) -> ParseResult<Orientation> {
        let (position, token) = self.next_token("ROWS or COLS")?;
        match Keyword::lookup(token) {
            Some(Keyword::Rows) => Ok(Orientation::Row),
            Some(Keyword::Cols) => Ok(Orientation::Column),
            _ => Err(ParseError::unexpected_token(position, token, "ROWS or COLS")),
        }
    }

    fn parse_direction(&mut self) -> ParseResult<Direction> {
        let (position, token) = self.next_token("ASC or DESC")?;
        match Keyword::lookup(token) {
            Some(Keyword::Asc) => Ok(Direction::Ascending),
            Some(Keyword::Desc) => Ok(Direction::Descending),
            _ => Err(ParseError::unexpected_token(position, token, "ASC or DESC")),
        }
    }

    fn parse_comparator(&mut self) -> ParseResult<Comparator> {
        const EXPECTED: &str = "AVG, MUL, MAX, MIN or XOR";
        let (position, token) = self.next_token(EXPECTED)?;
        match Keyword::lookup(token) {
            Some(Keyword::Avg) => Ok(Comparator::Average),
            Some(Keyword::Mul) => Ok(Comparator::Product),
            Some(Keyword::Max) => Ok(Comparator::Max),
            Some(Keyword::Min) => Ok(Comparator::Min),
            Some(Keyword::Xor) => Ok(Comparator::Xor),
            _ => Err(ParseError::unexpected_token(position, token, EXPECTED)),
        }
    }

    fn parse_run_policy(&mut self) -> ParseResult<RunPolicy> {
        const EXPECTED: &str = "FULL, DARK, LIGHT or FIXED";
        let (position, token) = self.next_token(EXPECTED)?;
        match Keyword::lookup(token) {
            Some(Keyword::Full) => Ok(RunPolicy::Full),
            Some(Keyword::Dark) => Ok(RunPolicy::Dark(self.parse_parameter()?)),
            Some(Keyword::Light) => Ok(RunPolicy::Light(self.parse_parameter()?)),
            Some(Keyword::Fixed) => {
                let (param_position, length) = self.parse_parameter_at()?;
                if length < 1 {
                    return Err(ParseError::invalid_parameter(
                        param_position,
                        length.to_string(),
                        "FIXED run length must be at least 1",
                    ));
                }
                Ok(RunPolicy::Fixed(length as usize))
            }
            _ => Err(ParseError::unexpected_token(position, token, EXPECTED)),
        }
    }

    fn parse_parameter(&mut self) -> ParseResult<u32> {
        self.parse_parameter_at().map(|(_, value)| value)
    }

    /// Parses a non-negative integer parameter, returning its position.
    fn parse_parameter_at(&mut self) -> ParseResult<(usize, u32)> {
        let (position, token) = self.next_token("a non-negative integer")?;
        let value = token.parse::<u32>().map_err(|_| {
            ParseError::invalid_parameter(position, token, "expected a non-negative integer")
        })?;
        Ok((position, value))
    }

    /// Consumes the next token, requiring it to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        let (position, token) = self.next_token(keyword.as_str())?;
        if Keyword::lookup(token) == Some(keyword) {
            Ok(())
        } else {
            Err(ParseError::unexpected_token(position, token, keyword.as_str()))
        }
    }

    /// Consumes and returns the next token with its position.
    fn next_token(&mut self, expected: &str) -> ParseResult<(usize, &'a str)> {
        let position = self.cursor;
        match self.tokens.get(position).copied() {
            Some(token) => {
                self.cursor += 1;
                Ok((position, token))
            }
            None => Err(ParseError::unexpected_end(position, expected)),
        }
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::errors::ParseErrorCode;

    #[test]
    fn test_parse_single_step() {
        let query = parse("SORT ROWS ASC BY AVG WITH FULL RUNS").unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(
            query.steps[0],
            SortStep::new(
                Orientation::Row,
                Direction::Ascending,
                Comparator::Average,
                RunPolicy::Full,
            )
        );
    }

    #[test]
    fn test_parse_policy_parameters() {
        let query = parse("SORT COLS DESC BY XOR WITH DARK 45 RUNS").unwrap();
        assert_eq!(query.steps[0].run_policy, RunPolicy::Dark(45));

        let query = parse("SORT ROWS ASC BY MIN WITH LIGHT 200 RUNS").unwrap();
        assert_eq!(query.steps[0].run_policy, RunPolicy::Light(200));

        let query = parse("SORT ROWS ASC BY MUL WITH FIXED 16 RUNS").unwrap();
        assert_eq!(query.steps[0].run_policy, RunPolicy::Fixed(16));
    }

    #[test]
    fn test_parse_chained_steps() {
        let query = parse(
            "SORT ROWS ASC BY AVG WITH FULL RUNS THEN SORT COLS DESC BY MAX WITH FIXED 8 RUNS",
        )
        .unwrap();
        assert_eq!(query.len(), 2);
        assert_eq!(query.steps[1].orientation, Orientation::Column);
        assert_eq!(query.steps[1].run_policy, RunPolicy::Fixed(8));
    }

    #[test]
    fn test_empty_query_rejected() {
        for input in ["", "   ", "\t\n"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.code(), ParseErrorCode::QueryEmpty);
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let err = parse("sort ROWS ASC BY AVG WITH FULL RUNS").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::UnexpectedToken);
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_bad_orientation_reports_token() {
        let err = parse("SORT COLUMNS ASC BY AVG WITH FULL RUNS").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::UnexpectedToken);
        assert_eq!(err.position(), 1);
        assert_eq!(err.token(), Some("COLUMNS"));
    }

    #[test]
    fn test_dangling_then_rejected() {
        let err = parse("SORT ROWS ASC BY AVG WITH FULL RUNS THEN").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::UnexpectedEnd);
        assert_eq!(err.position(), 9);
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        let err = parse("SORT ROWS ASC BY AVG WITH FULL RUNS AND MORE").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::UnexpectedToken);
        assert_eq!(err.position(), 8);
        assert_eq!(err.token(), Some("AND"));
    }

    #[test]
    fn test_missing_threshold_rejected() {
        // RUNS lands where the threshold should be
        let err = parse("SORT ROWS ASC BY AVG WITH DARK RUNS").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::InvalidParameter);
        assert_eq!(err.position(), 7);
        assert_eq!(err.token(), Some("RUNS"));
    }

    #[test]
    fn test_negative_parameter_rejected() {
        let err = parse("SORT ROWS ASC BY AVG WITH DARK -5 RUNS").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::InvalidParameter);
        assert_eq!(err.token(), Some("-5"));
    }

    #[test]
    fn test_fixed_zero_rejected() {
        let err = parse("SORT ROWS ASC BY AVG WITH FIXED 0 RUNS").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::InvalidParameter);
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn test_dark_zero_threshold_allowed() {
        let query = parse("SORT ROWS ASC BY AVG WITH DARK 0 RUNS").unwrap();
        assert_eq!(query.steps[0].run_policy, RunPolicy::Dark(0));
    }

    #[test]
    fn test_truncated_step_rejected() {
        let err = parse("SORT ROWS ASC BY AVG WITH FULL").unwrap_err();
        assert_eq!(err.code(), ParseErrorCode::UnexpectedEnd);
        assert_eq!(err.position(), 7);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "SORT COLS DESC BY MAX WITH LIGHT 128 RUNS";
        let first = parse(input).unwrap();
        let second = parse(input).unwrap();
        assert_eq!(first, second);

        let bad = "SORT COLS DESC BY MAXIMUM WITH LIGHT 128 RUNS";
        let first_err = parse(bad).unwrap_err();
        let second_err = parse(bad).unwrap_err();
        assert_eq!(first_err, second_err);
        assert_eq!(first_err.position(), 4);
    }
}
