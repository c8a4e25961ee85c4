//! Embedded Python interpreter host.
//!
//! Executes untrusted source text in a persistent global namespace by
//! driving a long-lived `python3` child process over a framed pipe
//! protocol. The child is spawned lazily, at most once per handle, and
//! all execution goes through [`EngineHandle::execute`].
//!
//! Intentional properties:
//! - Global interpreter state is never reset between calls; definitions
//!   accumulate for the life of the session.
//! - There is no execution timeout. A submission that loops forever
//!   blocks the caller indefinitely; ports of this crate to a
//!   multi-user server must treat that as a denial-of-service vector.

mod child;
mod handle;

use thiserror::Error;

pub use child::PyChild;
pub use handle::EngineHandle;

/// Failures surfaced by the interpreter host.
#[derive(Debug, Error)]
pub enum HostError {
    /// The interpreter process could not be started.
    #[error("failed to start interpreter: {0}")]
    Spawn(#[source] std::io::Error),
    /// The pipe to the interpreter broke mid-conversation.
    #[error("interpreter channel failed: {0}")]
    Channel(#[source] std::io::Error),
    /// The child sent something that is not a valid response frame.
    #[error("interpreter protocol violation: {0}")]
    Protocol(String),
    /// The source text raised; carries the interpreter's diagnostic.
    #[error("{0}")]
    Runtime(String),
}

/// String form of an executed frame's value.
///
/// `None` means the source ended in a statement rather than an
/// expression, so there is no value to report.
pub type ExecValue = Option<String>;
