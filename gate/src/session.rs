//! Per-session challenge state.
//!
//! A [`Session`] replaces the original page's window-scoped globals: it
//! is built once from the catalog, read by every run, and dropped when
//! the process ends. The expected value is resolved exactly once here;
//! setup-code hydration stays per-run (see [`crate::hydrate`]).

use anyhow::Result;
use tracing::{debug, warn};

use crate::assets::AssetStore;
use crate::catalog::{ASSET_PREFIX, Challenge, find_challenge, load_catalog};

/// One loaded challenge plus its session-cached judging inputs.
#[derive(Debug, Clone)]
pub struct Session {
    pub challenge: Challenge,
    /// Expected output, resolved from an asset reference if needed.
    pub expected: String,
    /// Test expression, defaulted when the record carries none.
    pub test_code: String,
}

impl Session {
    /// Load the catalog, select the challenge, and resolve judging state.
    ///
    /// Catalog or lookup failure is fatal for the session; an expected
    /// asset that fails to fetch degrades to the empty string.
    pub fn load(store: &AssetStore, id: &str, default_test_code: &str) -> Result<Self> {
        let challenges = load_catalog(store)?;
        let challenge = find_challenge(challenges, id)?;
        let expected = resolve_expected(store, challenge.expected.as_deref());
        let test_code = challenge
            .test_code
            .clone()
            .unwrap_or_else(|| default_test_code.to_string());
        debug!(id, expected_len = expected.len(), %test_code, "session loaded");
        Ok(Self {
            challenge,
            expected,
            test_code,
        })
    }
}

fn resolve_expected(store: &AssetStore, expected: Option<&str>) -> String {
    match expected {
        None => String::new(),
        Some(reference) if reference.starts_with(ASSET_PREFIX) => {
            match store.fetch_text(reference) {
                Ok(text) => text,
                Err(err) => {
                    warn!(reference, %err, "expected asset fetch failed, using empty expected");
                    String::new()
                }
            }
        }
        Some(literal) => literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_FILE;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn expected_literal_is_used_verbatim() {
        let temp = tempdir().expect("tempdir");
        fs::write(
            temp.path().join(CATALOG_FILE),
            r#"[{"id": "c", "expected": "ok", "test_code": "x"}]"#,
        )
        .expect("write");
        let store = AssetStore::new(temp.path());
        let session = Session::load(&store, "c", "output").expect("load");
        assert_eq!(session.expected, "ok");
        assert_eq!(session.test_code, "x");
    }

    #[test]
    fn expected_asset_reference_is_fetched_once_at_load() {
        let temp = tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("assets")).expect("mkdir");
        fs::write(temp.path().join("assets/out.txt"), "expected body").expect("write asset");
        fs::write(
            temp.path().join(CATALOG_FILE),
            r#"[{"id": "c", "expected": "assets/out.txt"}]"#,
        )
        .expect("write");
        let store = AssetStore::new(temp.path());
        let session = Session::load(&store, "c", "output").expect("load");
        assert_eq!(session.expected, "expected body");
        // Absent test_code falls back to the configured default name.
        assert_eq!(session.test_code, "output");
    }

    #[test]
    fn failed_expected_fetch_degrades_to_empty() {
        let temp = tempdir().expect("tempdir");
        fs::write(
            temp.path().join(CATALOG_FILE),
            r#"[{"id": "c", "expected": "assets/missing.txt"}]"#,
        )
        .expect("write");
        let store = AssetStore::new(temp.path());
        let session = Session::load(&store, "c", "output").expect("load");
        assert_eq!(session.expected, "");
    }

    #[test]
    fn absent_expected_is_empty() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(CATALOG_FILE), r#"[{"id": "c"}]"#).expect("write");
        let store = AssetStore::new(temp.path());
        let session = Session::load(&store, "c", "output").expect("load");
        assert_eq!(session.expected, "");
    }
}
