use std::cmp::Ordering;
use std::fmt::Write;

use crate::analyze::analyze_source;
use crate::engine::RuleEngine;
use crate::policy::{discount_branching, discount_rules};
use crate::types::{ComplexityReport, ComplexityScore, Context};

// Real source of the two variants, captured at compile time. Source retrieval
// stays out of the analyzer itself.
const POLICY_SOURCE: &str = include_str!("policy.rs");
const ENGINE_SOURCE: &str = include_str!("engine.rs");

/// True when the branching and rule-list variants agree for `user`
/// (same message, price within one cent).
#[must_use]
pub fn outcomes_match(user: &Context) -> bool {
    let engine = discount_rules();
    match engine.run(user) {
        Some(ruled) => discount_branching(user).matches(&ruled),
        None => false,
    }
}

/// True when the two variants agree for every user.
#[must_use]
pub fn verify_equivalence(users: &[Context]) -> bool {
    let engine = discount_rules();
    users.iter().all(|user| {
        engine
            .run(user)
            .is_some_and(|ruled| discount_branching(user).matches(&ruled))
    })
}

/// Score the branching policy from its real source text.
#[must_use]
pub fn branching_complexity() -> ComplexityReport {
    analyze_source("discount_branching", POLICY_SOURCE)
}

/// Score the rule engine's dispatch method from its real source text.
#[must_use]
pub fn dispatch_complexity() -> ComplexityReport {
    analyze_source("run", ENGINE_SOURCE)
}

/// Flat complexity estimate for a rule list: each rule is one independent,
/// non-nested decision point, so both metrics grow by 1 per rule.
#[must_use]
pub fn rules_estimate(engine: &RuleEngine) -> ComplexityScore {
    let n = u32::try_from(engine.len()).unwrap_or(u32::MAX);
    ComplexityScore {
        cyclomatic: n,
        cognitive: n,
    }
}

fn simpler(branching: u32, rules: u32) -> &'static str {
    match branching.cmp(&rules) {
        Ordering::Less => "branching",
        Ordering::Greater => "rules",
        Ordering::Equal => "tie",
    }
}

/// Render the full comparison: per-user outcomes from both variants, the
/// equivalence check, and the complexity of each encoding.
#[must_use]
pub fn comparison_report(users: &[Context]) -> String {
    let engine = discount_rules();
    let mut out = String::new();

    let _ = writeln!(out, "== Outcomes ==");
    for (i, user) in users.iter().enumerate() {
        let branching = discount_branching(user);
        let _ = writeln!(out, "{:2}. branching: {branching}", i + 1);
        match engine.run(user) {
            Some(ruled) => {
                let _ = writeln!(out, "    rules:     {ruled}");
            }
            None => {
                let _ = writeln!(out, "    rules:     no rule matched");
            }
        }
    }
    let equivalent = verify_equivalence(users);
    let _ = writeln!(
        out,
        "equivalent: {}",
        if equivalent { "yes" } else { "NO" }
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "== Complexity ==");
    let branching = branching_complexity();
    let dispatch = dispatch_complexity();
    let rules = rules_estimate(&engine);
    let total = dispatch.score.combine(rules);
    let _ = writeln!(out, "branching variant:  {branching}");
    let _ = writeln!(out, "rules dispatch:     {dispatch}");
    let _ = writeln!(out, "rules ({} entries):  {rules}", engine.len());
    let _ = writeln!(out, "rules total:        {total}");

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "simpler by cyclomatic: {}",
        simpler(branching.score.cyclomatic, total.cyclomatic)
    );
    let _ = writeln!(
        out,
        "simpler by cognitive:  {}",
        simpler(branching.score.cognitive, total.cognitive)
    );

    out
}
