use labelkit::labels::label_map;
use labelkit::selector::{
    Database, MatchOutcome, Selector, filter_by_labels, filter_with_report, match_labels,
};
use labelkit::test_utils::fixtures::{database, sample_fleet};
use labelkit::test_utils::logging::capture_logs;
use labelkit::test_utils::{TestCase, run_table_tests};
use tracing::Level;

fn names(databases: &[Database]) -> Vec<&str> {
    databases.iter().map(|db| db.name.as_str()).collect()
}

#[test]
fn filter_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "empty selector",
            input: "",
            expected: vec!["prod-a", "dev-b", "prod-c"],
        },
        TestCase {
            name: "single key",
            input: "env=prod",
            expected: vec!["prod-a", "prod-c"],
        },
        TestCase {
            name: "two keys",
            input: "env=prod,region=us",
            expected: vec!["prod-c"],
        },
        TestCase {
            name: "alternatives",
            input: "env=prod,env=dev",
            expected: vec!["prod-a", "dev-b", "prod-c"],
        },
        TestCase {
            name: "value wildcard needs the key",
            input: "region=*",
            expected: vec!["prod-c"],
        },
        TestCase {
            name: "match all",
            input: "*=*",
            expected: vec!["prod-a", "dev-b", "prod-c"],
        },
        TestCase {
            name: "glob value",
            input: "env=pr*",
            expected: vec!["prod-a", "prod-c"],
        },
        TestCase {
            name: "regex value",
            input: "env=^(dev|staging)$",
            expected: vec!["dev-b"],
        },
        TestCase {
            name: "unknown key",
            input: "team=db",
            expected: vec![],
        },
    ];

    let cases = cases
        .into_iter()
        .map(|case| TestCase {
            name: case.name,
            input: case.input,
            expected: case.expected.into_iter().map(String::from).collect::<Vec<_>>(),
        })
        .collect();
    run_table_tests(cases, |raw| {
        let selector = Selector::parse(raw).unwrap();
        filter_by_labels(&selector, sample_fleet())
            .into_iter()
            .map(|db| db.name)
            .collect::<Vec<_>>()
    })
}

#[test]
fn dynamic_labels_override_static() {
    let db = Database::new("orders")
        .with_label("env", "dev")
        .with_dynamic_label("env", "prod");
    let selector = Selector::parse("env=prod").unwrap();
    assert_eq!(names(&filter_by_labels(&selector, vec![db])), ["orders"]);
}

#[test]
fn match_reasons() {
    let labels = label_map([("env", "dev")]);

    let missing = match_labels(&Selector::parse("region=us").unwrap(), &labels).unwrap();
    assert!(!missing.matched);
    assert_eq!(missing.reason, "no key match: 'region'");

    let wrong = match_labels(&Selector::parse("env=prod").unwrap(), &labels).unwrap();
    assert!(!wrong.matched);
    assert_eq!(wrong.reason, r#"no value match: got 'dev' want: ["prod"]"#);
}

#[test]
fn wildcard_key_with_concrete_value_is_malformed() {
    let selector = Selector::new().with("*", ["prod"]);
    let outcome = MatchOutcome::evaluate(&selector, &label_map([("env", "prod")]));
    assert!(outcome.is_failed());
}

#[test]
fn malformed_selector_is_logged_and_batch_completes() {
    let selector = Selector::parse("env=prod,env=^(broken$").unwrap();
    let fleet = vec![
        database("a", &[("env", "prod")]),
        database("b", &[("env", "dev")]),
        database("c", &[("env", "prod")]),
    ];

    let (report, logs) = capture_logs(|| filter_with_report(&selector, fleet));

    assert_eq!(names(&report.matched), ["a", "c"]);
    assert_eq!(report.failure_count(), 1);
    assert!(logs.has_warnings());

    let warnings = logs.filter_by_level(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("resource"), Some("b"));
}

#[test]
fn non_matching_resources_are_logged_at_debug() {
    let selector = Selector::parse("env=prod").unwrap();
    let (matched, logs) = capture_logs(|| filter_by_labels(&selector, sample_fleet()));

    assert_eq!(matched.len(), 2);
    assert!(!logs.has_warnings());
    assert!(logs.contains_message("resource doesn't match selector"));
}
