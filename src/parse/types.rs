//! Types produced by the command scanner and consumed by the classifier.

/// Shell control operator separating consecutive command segments.
///
/// Closed enumeration: the scanner recognizes exactly these four, so
/// downstream code never sees unknown operator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `&&` — run next only if previous succeeded
    And,
    /// `||` — run next only if previous failed
    Or,
    /// `;` — run next unconditionally
    Semi,
    /// `|` — pipe stdout
    Pipe,
}

impl Operator {
    /// The operator's shell syntax.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Semi => ";",
            Operator::Pipe => "|",
        }
    }

    /// Human-readable description used in command breakdowns.
    pub fn description(self) -> &'static str {
        match self {
            Operator::And => "THEN (if successful)",
            Operator::Or => "OR (if failed)",
            Operator::Semi => "THEN (regardless)",
            Operator::Pipe => "PIPE output to",
        }
    }
}

/// One operator-delimited piece of a (possibly compound) command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The control operator that preceded this segment in the source
    /// string. `None` only for the first segment.
    pub operator: Option<Operator>,
    /// Trimmed segment text with quotes preserved verbatim. Never empty:
    /// empty pieces between operators are dropped, not emitted.
    pub text: String,
}
