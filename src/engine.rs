use std::fmt;
use std::time::{Duration, Instant};

use crate::types::{Context, Outcome, Rule};

/// An ordered list of (predicate, action) rules dispatched first-match-wins.
///
/// Insertion order is priority: `run` walks the list and returns the action
/// result of the first rule whose predicate holds. There is no implicit
/// default; callers wanting one append an always-true catch-all rule last.
///
/// # Example
///
/// ```
/// use rulegauge::{Context, Outcome, RuleEngine};
///
/// let mut engine = RuleEngine::new();
/// engine.add_rule(
///     "adult",
///     |u| u.int("age").unwrap_or(0) >= 18,
///     |_| Outcome::new("adult", 1.0),
/// );
/// engine.add_rule("default", |_| true, |_| Outcome::new("minor", 0.0));
///
/// let outcome = engine.run(&Context::new().set("age", 25_i64));
/// assert_eq!(outcome, Some(Outcome::new("adult", 1.0)));
/// ```
#[derive(Debug, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. Earlier rules win over later ones.
    pub fn add_rule(
        &mut self,
        name: &str,
        predicate: impl Fn(&Context) -> bool + 'static,
        action: impl Fn(&Context) -> Outcome + 'static,
    ) -> &mut Self {
        self.rules.push(Rule {
            name: name.to_owned(),
            predicate: Box::new(predicate),
            action: Box::new(action),
        });
        self
    }

    /// Evaluate rules in insertion order and return the first matching rule's
    /// action result, or `None` when no predicate holds.
    #[must_use]
    pub fn run(&self, ctx: &Context) -> Option<Outcome> {
        for rule in &self.rules {
            if (rule.predicate)(ctx) {
                return Some((rule.action)(ctx));
            }
        }
        None
    }

    /// Evaluate with diagnostics: which rule fired, how many predicates were
    /// checked, and the wall-clock duration of the dispatch.
    pub fn run_detailed(&self, ctx: &Context) -> RunReport {
        let start = Instant::now();
        for (position, rule) in self.rules.iter().enumerate() {
            if (rule.predicate)(ctx) {
                let outcome = (rule.action)(ctx);
                return RunReport::new(
                    Some(outcome),
                    Some(rule.name.clone()),
                    position + 1,
                    start.elapsed(),
                );
            }
        }
        RunReport::new(None, None, self.rules.len(), start.elapsed())
    }

    /// Number of rules in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in insertion (priority) order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }
}

impl fmt::Display for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleEngine({} rules)", self.rules.len())
    }
}

/// Diagnostics for one dispatch, returned by
/// [`RuleEngine::run_detailed()`](RuleEngine::run_detailed).
#[derive(Debug, Clone)]
#[must_use]
pub struct RunReport {
    outcome: Option<Outcome>,
    matched: Option<String>,
    checked: usize,
    duration: Duration,
}

impl RunReport {
    pub(crate) fn new(
        outcome: Option<Outcome>,
        matched: Option<String>,
        checked: usize,
        duration: Duration,
    ) -> Self {
        Self {
            outcome,
            matched,
            checked,
            duration,
        }
    }

    /// The dispatch result, same as [`RuleEngine::run()`](RuleEngine::run).
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Name of the rule that fired, if any.
    #[must_use]
    pub fn matched(&self) -> Option<&str> {
        self.matched.as_deref()
    }

    /// How many predicates were evaluated before dispatch stopped.
    #[must_use]
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Wall-clock duration of the dispatch.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.outcome, &self.matched) {
            (Some(outcome), Some(matched)) => {
                write!(f, "{matched} -> {outcome}")?;
            }
            _ => write!(f, "no rule matched")?,
        }
        write!(f, ", checked: {}, duration: {:?}", self.checked, self.duration)
    }
}
