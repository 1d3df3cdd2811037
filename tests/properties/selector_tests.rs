use std::collections::BTreeMap;

use proptest::prelude::*;

use labelkit::labels::LabelMap;
use labelkit::selector::{Database, Selector, filter_by_labels, filter_with_report, match_labels};

fn label_strategy() -> impl Strategy<Value = LabelMap> {
    prop::collection::btree_map("[a-z]{1,6}", "[a-z0-9]{1,6}", 0..5)
}

fn fleet_strategy() -> impl Strategy<Value = Vec<Database>> {
    prop::collection::vec(("[a-z]{1,6}", label_strategy()), 0..12).prop_map(|items| {
        items
            .into_iter()
            .map(|(name, labels)| Database {
                name,
                labels,
                ..Database::default()
            })
            .collect()
    })
}

fn names(databases: &[Database]) -> Vec<String> {
    databases.iter().map(|db| db.name.clone()).collect()
}

proptest! {
    #[test]
    fn test_empty_selector_keeps_everything_in_order(fleet in fleet_strategy()) {
        let expected = names(&fleet);
        let matched = filter_by_labels(&Selector::new(), fleet);
        prop_assert_eq!(names(&matched), expected);
    }

    #[test]
    fn test_labels_match_their_own_selector(labels in label_strategy()) {
        let selector: Selector = labels.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        prop_assert!(match_labels(&selector, &labels).unwrap().matched);

        let reversed: Selector = labels
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        prop_assert_eq!(&selector, &reversed);
        prop_assert!(match_labels(&reversed, &labels).unwrap().matched);
    }

    #[test]
    fn test_missing_key_never_matches(labels in label_strategy(), value in "[a-z0-9*]{1,4}") {
        prop_assume!(!labels.contains_key("absent"));
        let selector = Selector::new().with("absent", [value]);
        prop_assert!(!match_labels(&selector, &labels).unwrap().matched);
    }

    #[test]
    fn test_result_is_subsequence_of_input(fleet in fleet_strategy(), key in "[a-z]{1,2}") {
        let selector = Selector::new().with(key, ["*"]);
        let input = names(&fleet);
        let matched = names(&filter_by_labels(&selector, fleet));
        let mut rest = input.iter();
        for name in &matched {
            prop_assert!(rest.any(|n| n == name));
        }
    }

    #[test]
    fn test_malformed_resource_does_not_disturb_others(fleet in fleet_strategy()) {
        // "^(x$" is only compiled for resources whose `k` label is not "v"
        let selector = Selector::new().with("k", ["v", "^(x$"]);
        let mut broken = fleet.clone();
        broken.push(Database {
            name: "broken".to_string(),
            labels: BTreeMap::from([("k".to_string(), "w".to_string())]),
            ..Database::default()
        });

        let baseline = filter_with_report(&selector, fleet);
        let report = filter_with_report(&selector, broken);

        prop_assert_eq!(names(&report.matched), names(&baseline.matched));
        prop_assert_eq!(report.failure_count(), baseline.failure_count() + 1);
    }
}

#[test]
fn test_env_prod_example() {
    let fleet = vec![
        Database::new("a").with_label("env", "prod"),
        Database::new("b").with_label("env", "dev"),
        Database::new("c")
            .with_label("env", "prod")
            .with_label("region", "us"),
    ];
    let matched = filter_by_labels(&Selector::parse("env=prod").unwrap(), fleet);
    assert_eq!(names(&matched), ["a", "c"]);
}
