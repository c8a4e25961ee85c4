//! Gate configuration stored as `gate.toml` at the content root.
//!
//! This file is intended to be edited by humans and is entirely
//! optional: a missing file means defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Config file name at the content root.
pub const CONFIG_FILE: &str = "gate.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GateConfig {
    /// Python executable used to host submissions.
    pub python_bin: String,

    /// Expression judged when a challenge carries no `test_code`. The
    /// conventional name a challenge's setup or submission binds its
    /// final result to.
    pub default_test_code: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            python_bin: "python3".to_string(),
            default_test_code: "output".to_string(),
        }
    }
}

impl GateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.python_bin.trim().is_empty() {
            return Err(anyhow!("python_bin must be non-empty"));
        }
        if self.default_test_code.trim().is_empty() {
            return Err(anyhow!("default_test_code must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from the content root.
///
/// If `gate.toml` is missing, returns `GateConfig::default()`.
pub fn load_config(root: &Path) -> Result<GateConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        let cfg = GateConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GateConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().expect("tempdir");
        let cfg = load_config(temp.path()).expect("load");
        assert_eq!(cfg, GateConfig::default());
        assert_eq!(cfg.default_test_code, "output");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(CONFIG_FILE), "python_bin = \"python3.12\"\n")
            .expect("write");
        let cfg = load_config(temp.path()).expect("load");
        assert_eq!(cfg.python_bin, "python3.12");
        assert_eq!(cfg.default_test_code, "output");
    }

    #[test]
    fn empty_python_bin_is_rejected() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(CONFIG_FILE), "python_bin = \"\"\n").expect("write");
        load_config(temp.path()).expect_err("invalid config");
    }
}
