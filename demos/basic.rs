use rulegauge::{Context, Outcome, RuleEngine};

fn main() {
    // Define rules; insertion order is priority
    let mut engine = RuleEngine::new();
    engine.add_rule(
        "vip",
        |u| u.text("membership") == Some("gold"),
        |u| Outcome::new("VIP pricing", u.float("base_price").unwrap_or(0.0) * 0.80),
    );
    engine.add_rule(
        "default",
        |_| true,
        |u| Outcome::new("Standard pricing", u.float("base_price").unwrap_or(0.0)),
    );

    println!("{engine}");

    // Dispatch against a context
    let ctx = Context::new()
        .set("membership", "gold")
        .set("base_price", 100.0_f64);

    match engine.run(&ctx) {
        Some(outcome) => println!("Result: {outcome}"),
        None => println!("No rule matched."),
    }
}
