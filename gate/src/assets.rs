//! Content-root-relative asset fetches.
//!
//! The browser original resolved every reference with a relative
//! `fetch`; here the content root is a directory and assets are text
//! files inside it. Paths may not escape the root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Text-file store rooted at the challenge content directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fetch a text asset by root-relative path.
    pub fn fetch_text(&self, path: &str) -> Result<String> {
        validate_asset_path(path)?;
        let full = self.root.join(path);
        fs::read_to_string(&full).with_context(|| format!("fetch {}", full.display()))
    }
}

fn validate_asset_path(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        bail!("asset path must be non-empty");
    }
    if path.starts_with('/') || path.contains('\\') {
        bail!("asset path must be relative: {path}");
    }
    if path.split('/').any(|component| component == "..") {
        bail!("asset path must not contain '..': {path}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fetches_text_under_root() {
        let temp = tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("assets")).expect("mkdir");
        fs::write(temp.path().join("assets/out.txt"), "42\n").expect("write");

        let store = AssetStore::new(temp.path());
        let text = store.fetch_text("assets/out.txt").expect("fetch");
        assert_eq!(text, "42\n");
    }

    #[test]
    fn missing_asset_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let store = AssetStore::new(temp.path());
        let err = store.fetch_text("assets/nope.txt").expect_err("missing");
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn rejects_escaping_paths() {
        let temp = tempdir().expect("tempdir");
        let store = AssetStore::new(temp.path());
        store.fetch_text("../secrets.txt").expect_err("dotdot");
        store.fetch_text("/etc/passwd").expect_err("absolute");
        store.fetch_text("assets\\out.txt").expect_err("backslash");
        store.fetch_text("  ").expect_err("blank");
    }
}
