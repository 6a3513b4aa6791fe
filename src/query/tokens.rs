//! Keyword table and tokenizer
//!
//! The keyword lookup is shared by the tokenizer and the parser so the
//! grammar vocabulary lives in exactly one place.

/// Every keyword of the query grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Structural
    Sort,
    By,
    With,
    Runs,
    Then,
    // Orientation
    Rows,
    Cols,
    // Direction
    Asc,
    Desc,
    // Comparators
    Avg,
    Mul,
    Max,
    Min,
    Xor,
    // Run policies
    Full,
    Dark,
    Light,
    Fixed,
}

/// Keyword table: exact spelling on the wire, case-sensitive.
const KEYWORDS: &[(&str, Keyword)] = &[
    ("SORT", Keyword::Sort),
    ("BY", Keyword::By),
    ("WITH", Keyword::With),
    ("RUNS", Keyword::Runs),
    ("THEN", Keyword::Then),
    ("ROWS", Keyword::Rows),
    ("COLS", Keyword::Cols),
    ("ASC", Keyword::Asc),
    ("DESC", Keyword::Desc),
    ("AVG", Keyword::Avg),
    ("MUL", Keyword::Mul),
    ("MAX", Keyword::Max),
    ("MIN", Keyword::Min),
    ("XOR", Keyword::Xor),
    ("FULL", Keyword::Full),
    ("DARK", Keyword::Dark),
    ("LIGHT", Keyword::Light),
    ("FIXED", Keyword::Fixed),
];

impl Keyword {
    /// Looks up a token in the keyword table.
    ///
    /// Matching is exact and case-sensitive; no synonyms.
    pub fn lookup(token: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == token)
            .map(|(_, kw)| *kw)
    }

    /// The keyword's spelling in the grammar.
    pub fn as_str(&self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, kw)| kw == self)
            .map(|(text, _)| *text)
            .unwrap_or("")
    }
}

/// Splits a query string into its whitespace-delimited tokens.
///
/// Empty input yields an empty sequence. No escaping or quoting.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}
