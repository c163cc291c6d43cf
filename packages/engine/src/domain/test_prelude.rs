//! Shared proptest configuration for domain property tests.

use proptest::test_runner::Config;

pub fn proptest_config() -> Config {
    Config {
        cases: 256,
        ..Config::default()
    }
}
