//! Shared proptest configuration.
//!
//! Env knobs:
//! - `PROPTEST_CASES`: cases per property (default 32).
//! - `PROPTEST_MAX_SHRINK_MS`: optional cap for shrinking time.
//!
//! Generators in this workspace build valid inputs by construction, so the
//! global reject budget is left at its default.

use proptest::prelude::ProptestConfig;

const DEFAULT_CASES: u32 = 32;

pub fn config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = env_u32("PROPTEST_CASES").unwrap_or(DEFAULT_CASES).max(1);
    let max_shrink_time = env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // No regression files; failures print their seed instead.
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|s| s.parse::<u32>().ok())
}
