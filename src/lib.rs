mod analyze;
mod engine;
mod policy;
mod report;
mod types;

pub use analyze::{analyze_block, analyze_fn, analyze_source, classify, NodeKind};
pub use engine::{RuleEngine, RunReport};
pub use policy::{discount_branching, discount_rules};
pub use report::{
    branching_complexity, comparison_report, dispatch_complexity, outcomes_match, rules_estimate,
    verify_equivalence,
};
pub use types::{AnalyzeError, ComplexityReport, ComplexityScore, Context, Outcome, Rule, Value};
