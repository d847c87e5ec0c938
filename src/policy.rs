use crate::engine::RuleEngine;
use crate::types::{Context, Outcome};

/// Uppercase the first character: "gold" -> "Gold".
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Discount policy encoded as nested conditionals.
///
/// The data-driven equivalent is [`discount_rules`]; the two must produce the
/// same outcome for every context (checked by
/// [`verify_equivalence`](crate::verify_equivalence)). This function also
/// serves as the analyzer's branching-variant subject.
#[must_use]
pub fn discount_branching(user: &Context) -> Outcome {
    let membership = user.text("membership").unwrap_or("");
    let age = user.int("age").unwrap_or(0);
    let region = user.text("region").unwrap_or("");
    let base_price = user.float("base_price").unwrap_or(0.0);

    if membership == "gold" {
        if age > 18 {
            Outcome::new(
                format!("{} adult member", title_case(membership)),
                base_price * 0.80,
            )
        } else {
            Outcome::new(
                format!("{} young member", title_case(membership)),
                base_price * 0.85,
            )
        }
    } else if membership == "silver" {
        if region == "EU" {
            Outcome::new(
                format!("{} EU member", title_case(membership)),
                base_price * 0.95,
            )
        } else {
            Outcome::new("Regular member", base_price)
        }
    } else {
        Outcome::new("Regular member", base_price)
    }
}

/// The same policy as an ordered rule list ending in an unconditional
/// catch-all, so every context gets an outcome.
#[must_use]
pub fn discount_rules() -> RuleEngine {
    let mut engine = RuleEngine::new();

    engine.add_rule(
        "gold_adult",
        |u| u.text("membership") == Some("gold") && u.int("age").unwrap_or(0) > 18,
        |u| {
            Outcome::new(
                format!(
                    "{} adult member",
                    title_case(u.text("membership").unwrap_or(""))
                ),
                u.float("base_price").unwrap_or(0.0) * 0.80,
            )
        },
    );
    engine.add_rule(
        "gold_young",
        |u| u.text("membership") == Some("gold") && u.int("age").unwrap_or(0) <= 18,
        |u| {
            Outcome::new(
                format!(
                    "{} young member",
                    title_case(u.text("membership").unwrap_or(""))
                ),
                u.float("base_price").unwrap_or(0.0) * 0.85,
            )
        },
    );
    engine.add_rule(
        "silver_eu",
        |u| u.text("membership") == Some("silver") && u.text("region") == Some("EU"),
        |u| {
            Outcome::new(
                format!(
                    "{} EU member",
                    title_case(u.text("membership").unwrap_or(""))
                ),
                u.float("base_price").unwrap_or(0.0) * 0.95,
            )
        },
    );
    engine.add_rule(
        "regular",
        |_| true,
        |u| Outcome::new("Regular member", u.float("base_price").unwrap_or(0.0)),
    );

    engine
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(age: i64, membership: &str, region: &str, base_price: f64) -> Context {
        Context::new()
            .set("age", age)
            .set("membership", membership)
            .set("region", region)
            .set("base_price", base_price)
    }

    #[test]
    fn title_case_basics() {
        assert_eq!(title_case("gold"), "Gold");
        assert_eq!(title_case("EU"), "EU");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn branching_gold_adult() {
        let outcome = discount_branching(&user(25, "gold", "EU", 100.0));
        assert_eq!(outcome, Outcome::new("Gold adult member", 80.0));
    }

    #[test]
    fn branching_gold_young() {
        let outcome = discount_branching(&user(17, "gold", "US", 120.0));
        assert_eq!(outcome.message, "Gold young member");
        assert!((outcome.final_price - 102.0).abs() < 0.01);
    }

    #[test]
    fn branching_silver_eu() {
        let outcome = discount_branching(&user(30, "silver", "EU", 80.0));
        assert_eq!(outcome.message, "Silver EU member");
        assert!((outcome.final_price - 76.0).abs() < 0.01);
    }

    #[test]
    fn branching_silver_outside_eu_is_regular() {
        let outcome = discount_branching(&user(22, "silver", "US", 90.0));
        assert_eq!(outcome, Outcome::new("Regular member", 90.0));
    }

    #[test]
    fn branching_unknown_tier_is_regular() {
        let outcome = discount_branching(&user(28, "bronze", "EU", 60.0));
        assert_eq!(outcome, Outcome::new("Regular member", 60.0));
    }

    #[test]
    fn branching_age_boundary_18_is_young() {
        let outcome = discount_branching(&user(18, "gold", "EU", 100.0));
        assert_eq!(outcome.message, "Gold young member");
    }

    #[test]
    fn rules_cover_catch_all() {
        let engine = discount_rules();
        assert_eq!(
            engine.rule_names(),
            vec!["gold_adult", "gold_young", "silver_eu", "regular"]
        );
        // Empty context still dispatches, through the catch-all
        let outcome = engine.run(&Context::new());
        assert_eq!(outcome, Some(Outcome::new("Regular member", 0.0)));
    }

    #[test]
    fn rules_gold_adult() {
        let engine = discount_rules();
        let outcome = engine.run(&user(25, "gold", "EU", 100.0));
        assert_eq!(outcome, Some(Outcome::new("Gold adult member", 80.0)));
    }
}
