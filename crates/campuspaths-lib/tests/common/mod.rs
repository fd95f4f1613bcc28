//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

/// Directory holding the sample campus CSV files and scripts.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Random lowercase label drawn from a small alphabet so collisions happen.
#[allow(dead_code)]
pub fn random_label(rng: &mut fastrand::Rng, len: usize) -> String {
    (0..len).map(|_| rng.char('a'..='e')).collect()
}
