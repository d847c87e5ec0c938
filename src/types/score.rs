use std::fmt;

/// The two counters accumulated by one walk over a function body.
///
/// `cyclomatic` starts at 1 (the single default path); `cognitive` starts at
/// 0. Both are monotonically non-decreasing during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplexityScore {
    pub cyclomatic: u32,
    pub cognitive: u32,
}

impl ComplexityScore {
    /// Score of a body with no decision points.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            cyclomatic: 1,
            cognitive: 0,
        }
    }

    /// Component-wise sum, for combining a dispatch method's score with an
    /// estimate for its rule list.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            cyclomatic: self.cyclomatic + other.cyclomatic,
            cognitive: self.cognitive + other.cognitive,
        }
    }
}

impl fmt::Display for ComplexityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cyclomatic {}, cognitive {}", self.cyclomatic, self.cognitive)
    }
}

/// Analyzer output for one named function.
///
/// A failed analysis (unparsable source, function not found) is reported here
/// rather than as an `Err`: the score is zeroed and `error` carries the
/// description, but `function_name` is always populated.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ComplexityReport {
    pub function_name: String,
    pub score: ComplexityScore,
    pub error: Option<String>,
}

impl ComplexityReport {
    pub(crate) fn ok(function_name: impl Into<String>, score: ComplexityScore) -> Self {
        Self {
            function_name: function_name.into(),
            score,
            error: None,
        }
    }

    pub(crate) fn failed(function_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            score: ComplexityScore::default(),
            error: Some(error.into()),
        }
    }
}

impl fmt::Display for ComplexityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{}: analysis failed ({error})", self.function_name),
            None => write!(f, "{}: {}", self.function_name, self.score),
        }
    }
}
