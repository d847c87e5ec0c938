use rulegauge::{analyze_source, ComplexityScore};

#[test]
fn straight_line_function_scores_baseline() {
    let report = analyze_source("plain", "fn plain(x: i64) -> i64 { x + 1 }");
    assert_eq!(report.error, None);
    assert_eq!(report.score.cyclomatic, 1);
    assert_eq!(report.score.cognitive, 0);
}

#[test]
fn independent_branches_scale_linearly() {
    let report = analyze_source(
        "gate",
        "fn gate(a: i64) -> i64 {
            if a > 1 { return 1; }
            if a > 2 { return 2; }
            if a > 3 { return 3; }
            if a > 4 { return 4; }
            0
        }",
    );
    assert_eq!(report.score.cyclomatic, 5);
    assert_eq!(report.score.cognitive, 4);
}

#[test]
fn policy_shaped_function_end_to_end() {
    // One top-level branch containing one nested branch
    let report = analyze_source(
        "policy",
        "fn policy(gold: bool, age: i64) -> i64 {
            if gold {
                if age > 18 { 20 } else { 15 }
            } else {
                0
            }
        }",
    );
    assert_eq!(report.score.cyclomatic, 3);
    assert_eq!(report.score.cognitive, 3);
}

#[test]
fn mixed_constructs_accumulate() {
    let report = analyze_source(
        "mixed",
        "fn mixed(items: &[i64]) -> Result<i64, Error> {
            let mut total = 0;
            for item in items {
                if *item > 0 && *item < 100 {
                    total += check(*item)?;
                }
            }
            Ok(total)
        }",
    );
    // for (cy 1, cog 1) + if (cy 1, cog 2) + && (cog 1) + ? (cy 1, cog 3)
    assert_eq!(report.score.cyclomatic, 4);
    assert_eq!(report.score.cognitive, 7);
}

#[test]
fn uniform_boolean_chain_counts_once() {
    // A predicate-shaped conjunction of three conditions reads as one
    // combined condition, not two.
    let report = analyze_source(
        "eligible",
        "fn eligible(u: &User) -> bool {
            u.membership == \"gold\" && u.age > 18 && u.region == \"EU\"
        }",
    );
    assert_eq!(report.error, None);
    assert_eq!(report.score.cyclomatic, 1);
    assert_eq!(report.score.cognitive, 1);
}

#[test]
fn finds_method_inside_impl_block() {
    let src = "
        pub struct Dispatcher {
            handlers: Vec<Handler>,
        }

        impl Dispatcher {
            pub fn dispatch(&self, key: u32) -> Option<&Handler> {
                for handler in &self.handlers {
                    if handler.accepts(key) {
                        return Some(handler);
                    }
                }
                None
            }
        }
    ";
    let report = analyze_source("dispatch", src);
    assert_eq!(report.error, None);
    assert_eq!(report.score.cyclomatic, 3);
    assert_eq!(report.score.cognitive, 3);
}

#[test]
fn unparsable_source_reports_error_not_panic() {
    let report = analyze_source("built_in", "<built-in function len>");
    assert_eq!(report.function_name, "built_in");
    assert_eq!(report.score, ComplexityScore::default());
    let error = report.error.expect("error description attached");
    assert!(!error.is_empty());
}

#[test]
fn missing_function_reports_name_and_error() {
    let report = analyze_source("ghost", "fn solid() -> i64 { 1 }");
    assert_eq!(report.function_name, "ghost");
    assert_eq!(report.score, ComplexityScore::default());
    assert!(report
        .error
        .as_deref()
        .is_some_and(|e| e.contains("ghost")));
}

#[test]
fn empty_source_reports_missing_function() {
    let report = analyze_source("anything", "");
    assert_eq!(report.score, ComplexityScore::default());
    assert!(report.error.is_some());
}
