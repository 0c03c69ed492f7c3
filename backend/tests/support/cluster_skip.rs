//! Policy for suites that need embedded PostgreSQL.
//!
//! Developer machines and sandboxes often cannot download or start the
//! PostgreSQL binaries, so suites skip by default. CI sets
//! `REQUIRE_TEST_CLUSTER` to turn setup failures into test failures.

/// Returns true when `REQUIRE_TEST_CLUSTER` is "1", "true" or "yes"
/// (case-insensitive).
pub fn cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip (returning `None`) or panic, depending on [`cluster_required`].
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
