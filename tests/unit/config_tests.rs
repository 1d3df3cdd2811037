use std::path::PathBuf;

use labelkit::config::Config;
use labelkit::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn config_from_fixture() -> Result<(), String> {
    let cases = vec![TestCase {
        name: "custom",
        input: "tests/fixtures/labelkit.toml",
        expected: (
            "release/".to_string(),
            "deploy/chart/".to_string(),
            vec!["docs".to_string(), "guides".to_string()],
            true,
            "env=prod,env=staging".to_string(),
        ),
    }];

    run_table_tests(cases, |relative_path| {
        let raw = std::fs::read_to_string(fixture_path(relative_path)).expect("read fixture");
        let config = Config::from_toml(&raw).expect("parse config");
        (
            config.inference.backport_prefix.clone(),
            config.inference.chart_prefix.clone(),
            config.inference.docs.directories.clone(),
            config.inference.is_rule_disabled("helm-chart-files"),
            config.selector.selector().to_string(),
        )
    })
}

#[test]
fn explicit_config_path_wins() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".labelkit.toml"),
        "[inference]\nbackport_prefix = \"project/\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[inference]\nbackport_prefix = \"explicit/\"\n").unwrap();

    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.inference.backport_prefix, "explicit/");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(Config::load(Some(&missing), dir.path()).is_err());
}

#[test]
fn malformed_config_is_an_error() {
    assert!(Config::from_toml("[inference\nbackport_prefix = 1").is_err());
}
