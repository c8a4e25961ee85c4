//! Lazy, shared access to the single interpreter instance.

use std::sync::Mutex;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::child::PyChild;
use crate::{ExecValue, HostError};

/// Handle to the session's one interpreter.
///
/// The child is spawned on first use through a single-assignment cell,
/// so racing first callers still end up sharing one instance. The
/// mutex serializes frames: a second run requested while one is in
/// flight waits instead of interleaving on shared interpreter state.
#[derive(Debug)]
pub struct EngineHandle {
    python_bin: String,
    cell: OnceCell<Mutex<PyChild>>,
}

impl EngineHandle {
    pub fn new(python_bin: impl Into<String>) -> Self {
        Self {
            python_bin: python_bin.into(),
            cell: OnceCell::new(),
        }
    }

    /// Spawn the interpreter if it is not running yet.
    ///
    /// Idempotent: later calls return the same instance without
    /// re-initializing. The interpreter is never torn down before the
    /// handle drops.
    pub fn ensure_ready(&self) -> Result<&Mutex<PyChild>, HostError> {
        self.cell.get_or_try_init(|| {
            debug!(python_bin = %self.python_bin, "initializing interpreter");
            PyChild::spawn(&self.python_bin).map(Mutex::new)
        })
    }

    /// Execute source text against the shared persistent namespace.
    pub fn execute(&self, source: &str) -> Result<ExecValue, HostError> {
        let child = self.ensure_ready()?;
        let mut guard = child
            .lock()
            .map_err(|_| HostError::Protocol("interpreter lock poisoned".to_string()))?;
        guard.execute(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    fn python_available() -> bool {
        Command::new("python3")
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn spawn_failure_surfaces_on_every_call() {
        let handle = EngineHandle::new("definitely-not-a-python");
        assert!(matches!(
            handle.execute("1"),
            Err(HostError::Spawn(_))
        ));
        // The cell stays empty after a failed init, so retry is possible.
        assert!(matches!(
            handle.execute("1"),
            Err(HostError::Spawn(_))
        ));
    }

    #[test]
    fn handle_shares_one_namespace() {
        if !python_available() {
            eprintln!("python3 not available, skipping");
            return;
        }
        let handle = EngineHandle::new("python3");
        handle.execute("counter = 0").expect("init");
        handle.execute("counter = counter + 1").expect("bump");
        let value = handle.execute("counter").expect("read");
        assert_eq!(value.as_deref(), Some("1"));
    }
}
