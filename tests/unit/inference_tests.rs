use labelkit::config::InferenceConfig;
use labelkit::infer::{Evidence, LabelEngine};
use labelkit::labels::{BACKPORT, DOCUMENTATION, HELM, LabelSet};
use labelkit::test_utils::fixtures::backport_evidence;
use labelkit::test_utils::{TestCase, run_table_tests};

fn labels(items: &[&str]) -> LabelSet {
    items.iter().copied().collect()
}

#[test]
fn inference_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "empty evidence",
            input: Evidence::new("", Vec::<String>::new()),
            expected: labels(&[]),
        },
        TestCase {
            name: "backport branch only",
            input: Evidence::from_branch("branch/v14"),
            expected: labels(&[BACKPORT]),
        },
        TestCase {
            name: "feature branch",
            input: Evidence::from_branch("alice/fix-watcher"),
            expected: labels(&[]),
        },
        TestCase {
            name: "prefix must be at the start",
            input: Evidence::from_branch("feature/branch/v14"),
            expected: labels(&[]),
        },
        TestCase {
            name: "documentation and helm",
            input: Evidence::new(
                "",
                ["docs/pages/intro.mdx", "examples/chart/teleport/values.yaml"],
            ),
            expected: labels(&[DOCUMENTATION, HELM]),
        },
        TestCase {
            name: "rfd counts as documentation",
            input: Evidence::new("", ["rfd/0001-labels.md"]),
            expected: labels(&[DOCUMENTATION]),
        },
        TestCase {
            name: "markdown anywhere counts as documentation",
            input: Evidence::new("", ["lib/srv/README.md"]),
            expected: labels(&[DOCUMENTATION]),
        },
        TestCase {
            name: "code only",
            input: Evidence::new("", ["lib/srv/db/watcher.go", "go.mod"]),
            expected: labels(&[]),
        },
        TestCase {
            name: "everything",
            input: backport_evidence(),
            expected: labels(&[BACKPORT, DOCUMENTATION, HELM]),
        },
    ];

    let engine = LabelEngine::with_defaults();
    run_table_tests(cases, |evidence| engine.infer(&evidence))
}

#[test]
fn many_chart_files_yield_one_helm_label() {
    let engine = LabelEngine::with_defaults();
    let files: Vec<String> = (0..50)
        .map(|i| format!("examples/chart/templates/t{i}.yaml"))
        .collect();
    let report = engine.explain(&Evidence::new("", files));

    assert_eq!(report.labels, labels(&[HELM]));
    assert_eq!(report.hits.len(), 1);
    assert_eq!(report.hits[0].reason, "chart file examples/chart/templates/t0.yaml");
}

#[test]
fn custom_prefixes_from_config() {
    let config = labelkit::config::Config::from_toml(
        r#"
[inference]
backport_prefix = "release/"
chart_prefix = "deploy/helm/"
"#,
    )
    .unwrap();
    let engine = LabelEngine::from_config(config.inference).unwrap();

    let evidence = Evidence::new("release/2.0", ["deploy/helm/Chart.yaml"]);
    assert_eq!(engine.infer(&evidence), labels(&[BACKPORT, HELM]));

    let old = Evidence::new("branch/v15", ["examples/chart/values.yaml"]);
    assert!(engine.infer(&old).is_empty());
}

#[test]
fn disabled_rule_contributes_nothing() {
    let config = InferenceConfig::default().disable_rule("documentation-files");
    let engine = LabelEngine::from_config(config).unwrap();
    assert_eq!(
        engine.infer(&backport_evidence()),
        labels(&[BACKPORT, HELM])
    );
}

#[test]
fn empty_prefix_is_rejected() {
    let config = InferenceConfig {
        backport_prefix: String::new(),
        ..InferenceConfig::default()
    };
    assert!(LabelEngine::from_config(config).is_err());
}
