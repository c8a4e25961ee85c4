//! Test-only helpers: catalog builders and a scripted interpreter.

use std::cell::RefCell;
use std::collections::VecDeque;

use pyhost::{ExecValue, HostError};
use tempfile::TempDir;

use crate::assets::AssetStore;
use crate::catalog::Challenge;
use crate::engine::Interpreter;
use crate::session::Session;

/// A minimal challenge record with the given id and empty fields.
pub fn challenge(id: &str) -> Challenge {
    Challenge {
        id: id.to_string(),
        template: String::new(),
        description: String::new(),
        stamp: String::new(),
        tasks: Vec::new(),
        example: String::new(),
        starter_code: String::new(),
        setup_code: String::new(),
        test_code: None,
        flag: String::new(),
        required_terms: Vec::new(),
        forbidden_terms: Vec::new(),
        expected: None,
    }
}

/// A session over the record, resolving expected/test-code the way the
/// loader does for literal values.
pub fn session_for(record: Challenge) -> Session {
    let expected = record.expected.clone().unwrap_or_default();
    let test_code = record
        .test_code
        .clone()
        .unwrap_or_else(|| "output".to_string());
    Session {
        challenge: record,
        expected,
        test_code,
    }
}

/// An asset store over a fresh empty directory.
pub fn empty_store() -> (TempDir, AssetStore) {
    let temp = TempDir::new().expect("tempdir");
    let store = AssetStore::new(temp.path());
    (temp, store)
}

/// Interpreter that replays scripted responses in call order and
/// records every source it was asked to execute.
pub struct ScriptedInterpreter {
    script: RefCell<VecDeque<Result<ExecValue, HostError>>>,
    sources: RefCell<Vec<String>>,
}

impl ScriptedInterpreter {
    pub fn new(script: Vec<Result<ExecValue, HostError>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            sources: RefCell::new(Vec::new()),
        }
    }

    /// Sources executed so far, in order.
    pub fn sources(&self) -> Vec<String> {
        self.sources.borrow().clone()
    }
}

impl Interpreter for ScriptedInterpreter {
    fn execute(&self, source: &str) -> Result<ExecValue, HostError> {
        self.sources.borrow_mut().push(source.to_string());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("scripted interpreter exhausted at {source:?}"))
    }
}
