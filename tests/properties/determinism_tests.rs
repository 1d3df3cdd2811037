use proptest::prelude::*;

use labelkit::infer::{Evidence, LabelEngine};
use labelkit::selector::{Database, Selector, filter_with_report, par_filter_with_report};

fn path_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.(go|rs|md|mdx|yaml)",
        "docs/[a-z]{1,8}\\.mdx",
        "examples/chart/[a-z]{1,8}\\.yaml",
    ]
}

fn database_strategy() -> impl Strategy<Value = Database> {
    (
        "[a-z]{1,6}",
        prop::collection::btree_map("(env|team|region)", "(prod|dev|us|eu)", 0..3),
    )
        .prop_map(|(name, labels)| Database {
            name,
            labels,
            ..Database::default()
        })
}

proptest! {
    #[test]
    fn test_inference_deterministic(
        branch in "(branch/)?[a-z0-9./-]{0,16}",
        files in prop::collection::vec(path_strategy(), 0..8),
    ) {
        let engine = LabelEngine::with_defaults();
        let evidence = Evidence::new(branch.as_str(), files);
        prop_assert_eq!(engine.infer(&evidence), engine.infer(&evidence));
    }

    #[test]
    fn test_parallel_filter_matches_sequential(
        databases in prop::collection::vec(database_strategy(), 0..20),
        pairs in prop::collection::vec(
            ("(env|team)", prop_oneof![Just("prod"), Just("dev"), Just("*"), Just("p*"), Just("^(bad$")]),
            0..4,
        ),
    ) {
        let selector: Selector = pairs.into_iter().collect();
        let sequential = filter_with_report(&selector, databases.clone());
        let parallel = par_filter_with_report(&selector, databases);
        prop_assert_eq!(sequential.matched, parallel.matched);
        prop_assert_eq!(sequential.diagnostics, parallel.diagnostics);
    }

    #[test]
    fn test_selector_parse_never_panics(raw in ".*") {
        let _ = Selector::parse(&raw);
    }
}
