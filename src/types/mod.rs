mod context;
mod error;
mod outcome;
mod rule;
mod score;
mod value;

pub use context::Context;
pub use error::AnalyzeError;
pub use outcome::Outcome;
pub use rule::Rule;
pub use score::{ComplexityReport, ComplexityScore};
pub use value::Value;
