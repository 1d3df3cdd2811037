//! Canned inputs shared by unit and integration tests.

use crate::infer::Evidence;
use crate::selector::Database;

/// A database with the given static labels.
#[must_use]
pub fn database(name: &str, labels: &[(&str, &str)]) -> Database {
    labels
        .iter()
        .fold(Database::new(name), |db, (k, v)| db.with_label(*k, *v))
}

/// Three databases: `prod-a {env:prod}`, `dev-b {env:dev}`,
/// `prod-c {env:prod, region:us}`.
#[must_use]
pub fn sample_fleet() -> Vec<Database> {
    vec![
        database("prod-a", &[("env", "prod")]),
        database("dev-b", &[("env", "dev")]),
        database("prod-c", &[("env", "prod"), ("region", "us")]),
    ]
}

/// Evidence touching documentation and the Helm chart from a backport branch.
#[must_use]
pub fn backport_evidence() -> Evidence {
    Evidence::new(
        "branch/v15",
        [
            "lib/srv/db/watcher.go",
            "docs/pages/database-access.mdx",
            "examples/chart/values.yaml",
        ],
    )
}
