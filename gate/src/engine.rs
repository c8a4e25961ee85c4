//! Interpreter seam between the pipeline and the embedded host.
//!
//! The pipeline only needs "execute source text, get a value or a
//! raise"; this trait captures that so tests can script the
//! interpreter (see [`crate::test_support`]) while the binary wires in
//! the real [`pyhost::EngineHandle`].

use pyhost::{ExecValue, HostError};

/// Execute source text in a persistent shared namespace.
pub trait Interpreter {
    fn execute(&self, source: &str) -> Result<ExecValue, HostError>;
}

impl Interpreter for pyhost::EngineHandle {
    fn execute(&self, source: &str) -> Result<ExecValue, HostError> {
        // Resolves to the inherent method on the handle.
        pyhost::EngineHandle::execute(self, source)
    }
}
