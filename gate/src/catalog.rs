//! Challenge catalog parsing and lookup.
//!
//! The catalog is a JSON array of challenge records at the content
//! root. Records use the catalog's snake_case wire keys and are read
//! once per session, never mutated after load.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::assets::AssetStore;

/// Catalog file name at the content root.
pub const CATALOG_FILE: &str = "challenges.json";

/// Reserved prefix marking a field value as an asset reference.
pub const ASSET_PREFIX: &str = "assets/";

/// One challenge record from the catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Challenge {
    /// Unique key, matched exactly against the requested id.
    pub id: String,
    /// Presentation theme name; selects a stylesheet, unused by the run.
    #[serde(default)]
    pub template: String,
    #[serde(default, rename = "challenge_description")]
    pub description: String,
    #[serde(default, rename = "challenge_stamp")]
    pub stamp: String,
    /// Ordered instruction lines shown to the learner.
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub example: String,
    /// Initial editor content.
    #[serde(default)]
    pub starter_code: String,
    /// Source executed before the submission; may embed file references.
    #[serde(default)]
    pub setup_code: String,
    /// Expression judged after the submission. Absent means the
    /// conventional default expression (see config).
    #[serde(default)]
    pub test_code: Option<String>,
    /// Reward token revealed only on success.
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub required_terms: Vec<String>,
    #[serde(default)]
    pub forbidden_terms: Vec<String>,
    /// Literal expected output, or an `assets/`-prefixed reference.
    #[serde(default)]
    pub expected: Option<String>,
}

/// Load and validate the full catalog from the content root.
pub fn load_catalog(store: &AssetStore) -> Result<Vec<Challenge>> {
    let contents = store
        .fetch_text(CATALOG_FILE)
        .context("load challenge catalog")?;
    let challenges: Vec<Challenge> =
        serde_json::from_str(&contents).context("parse challenge catalog")?;

    let mut seen = BTreeSet::new();
    for challenge in &challenges {
        if challenge.id.trim().is_empty() {
            bail!("catalog record with empty id");
        }
        if !seen.insert(challenge.id.as_str()) {
            bail!("duplicate challenge id {}", challenge.id);
        }
    }
    Ok(challenges)
}

/// Select one record by exact id match.
pub fn find_challenge(challenges: Vec<Challenge>, id: &str) -> Result<Challenge> {
    challenges
        .into_iter()
        .find(|challenge| challenge.id == id)
        .with_context(|| format!("challenge {id} not found in catalog"))
}
