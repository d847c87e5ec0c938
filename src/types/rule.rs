use std::fmt;

use super::context::Context;
use super::outcome::Outcome;

pub(crate) type Predicate = Box<dyn Fn(&Context) -> bool>;
pub(crate) type Action = Box<dyn Fn(&Context) -> Outcome>;

/// A named (predicate, action) pair.
///
/// Rules are created via [`RuleEngine::add_rule`](crate::RuleEngine::add_rule),
/// stored in insertion order, and never mutated afterwards. Both halves are
/// plain function values over the evaluation context; by convention they are
/// pure.
pub struct Rule {
    pub(crate) name: String,
    pub(crate) predicate: Predicate,
    pub(crate) action: Action,
}

impl Rule {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Function values have no useful Debug output
        f.debug_struct("Rule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
