use std::fmt;

/// Result of applying a discount policy to one context: a display message and
/// the price after discount.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Outcome {
    pub message: String,
    pub final_price: f64,
}

impl Outcome {
    pub fn new(message: impl Into<String>, final_price: f64) -> Self {
        Self {
            message: message.into(),
            final_price,
        }
    }

    /// Message equality plus price agreement within one cent. Used when
    /// checking that the branching and rule-list variants produce the same
    /// answer.
    #[must_use]
    pub fn matches(&self, other: &Outcome) -> bool {
        self.message == other.message && (self.final_price - other.final_price).abs() < 0.01
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${:.2})", self.message, self.final_price)
    }
}
