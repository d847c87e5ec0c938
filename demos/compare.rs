use rulegauge::{comparison_report, Context};

fn user(age: i64, membership: &str, region: &str, base_price: f64) -> Context {
    Context::new()
        .set("age", age)
        .set("membership", membership)
        .set("region", region)
        .set("base_price", base_price)
}

fn main() {
    let users = vec![
        user(25, "gold", "EU", 100.0),
        user(17, "gold", "US", 120.0),
        user(30, "silver", "EU", 80.0),
        user(22, "silver", "US", 90.0),
        user(16, "gold", "EU", 150.0),
        user(45, "platinum", "EU", 200.0),
        user(19, "silver", "EU", 75.0),
        user(50, "gold", "US", 180.0),
        user(12, "silver", "US", 50.0),
        user(28, "bronze", "EU", 60.0),
    ];

    print!("{}", comparison_report(&users));
}
