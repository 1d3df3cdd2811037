use proptest::prelude::*;

use labelkit::infer::{Evidence, LabelEngine};
use labelkit::labels::{BACKPORT, DOCUMENTATION, HELM};

proptest! {
    #[test]
    fn test_backport_prefix_always_labels(suffix in "[a-zA-Z0-9./_-]{0,24}") {
        let engine = LabelEngine::with_defaults();
        let labels = engine.infer(&Evidence::from_branch(format!("branch/{suffix}")));
        prop_assert!(labels.contains(BACKPORT));
    }

    #[test]
    fn test_other_branches_never_backport(branch in "[a-z][a-z0-9_-]{0,16}(/[a-z0-9._-]{1,8})?") {
        prop_assume!(!branch.starts_with("branch/"));
        let engine = LabelEngine::with_defaults();
        prop_assert!(engine.infer(&Evidence::from_branch(branch)).is_empty());
    }

    #[test]
    fn test_chart_files_give_single_helm(names in prop::collection::vec("[a-z]{1,8}\\.yaml", 1..20)) {
        let engine = LabelEngine::with_defaults();
        let files: Vec<String> = names.iter().map(|n| format!("examples/chart/{n}")).collect();
        let report = engine.explain(&Evidence::new("", files));
        prop_assert!(report.labels.contains(HELM));
        prop_assert_eq!(report.hits.iter().filter(|h| h.label == HELM).count(), 1);
    }

    #[test]
    fn test_docs_and_chart_give_both(
        doc in "[a-z]{1,8}\\.mdx",
        chart in "[a-z]{1,8}\\.yaml",
    ) {
        let engine = LabelEngine::with_defaults();
        let evidence = Evidence::new(
            "",
            [format!("docs/pages/{doc}"), format!("examples/chart/{chart}")],
        );
        let labels = engine.infer(&evidence);
        prop_assert_eq!(labels.len(), 2);
        prop_assert!(labels.contains(DOCUMENTATION));
        prop_assert!(labels.contains(HELM));
    }

    #[test]
    fn test_file_order_does_not_matter(mut files in prop::collection::vec("(docs|lib|examples/chart)/[a-z]{1,6}\\.(go|md|yaml)", 0..10)) {
        let engine = LabelEngine::with_defaults();
        let forward = engine.infer(&Evidence::new("", files.clone()));
        files.reverse();
        prop_assert_eq!(forward, engine.infer(&Evidence::new("", files)));
    }
}

#[test]
fn test_empty_evidence_gives_no_labels() {
    let engine = LabelEngine::with_defaults();
    assert!(engine.infer(&Evidence::new("", Vec::<String>::new())).is_empty());
}
