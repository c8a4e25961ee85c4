//! CLI command implementations.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use pyhost::EngineHandle;
use tracing::debug;

use crate::assets::AssetStore;
use crate::catalog::load_catalog;
use crate::config::load_config;
use crate::exit_codes;
use crate::pipeline::run_submission;
use crate::session::Session;

/// List all challenge ids in catalog order.
pub fn list_challenges(root: &Path) -> Result<()> {
    let store = AssetStore::new(root);
    for challenge in load_catalog(&store)? {
        println!("{}", challenge.id);
    }
    Ok(())
}

/// Print a challenge's presentation fields.
pub fn show_challenge(root: &Path, id: &str) -> Result<()> {
    let store = AssetStore::new(root);
    let config = load_config(root)?;
    let session = Session::load(&store, id, &config.default_test_code)?;
    let challenge = &session.challenge;

    println!("{} [{}]", challenge.id, challenge.template);
    println!("{}", challenge.stamp);
    println!();
    println!("{}", challenge.description);
    for (index, task) in challenge.tasks.iter().enumerate() {
        println!("  {}. {}", index + 1, task);
    }
    if !challenge.example.is_empty() {
        println!();
        println!("example:");
        println!("{}", challenge.example);
    }
    if !challenge.starter_code.is_empty() {
        println!();
        println!("starter code:");
        println!("{}", challenge.starter_code);
    }
    Ok(())
}

/// Run a submission against a challenge and print the verdict message.
///
/// The submission comes from `file`, or stdin when no file is given.
pub fn run_challenge(root: &Path, id: &str, file: Option<&Path>) -> Result<i32> {
    let store = AssetStore::new(root);
    let config = load_config(root)?;
    let session = Session::load(&store, id, &config.default_test_code)?;

    let user_code = read_submission(file)?;
    debug!(id, submission_bytes = user_code.len(), "submission read");

    let engine = EngineHandle::new(&config.python_bin);
    let verdict = run_submission(&session, &user_code, &engine, &store);
    println!("{}", verdict.render());

    Ok(if verdict.is_success() {
        exit_codes::OK
    } else {
        exit_codes::FAILED
    })
}

fn read_submission(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read submission {}", path.display()))
        }
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("read submission from stdin")?;
            Ok(code)
        }
    }
}
