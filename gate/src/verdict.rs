//! Per-run outcomes and their display messages.
//!
//! A verdict exists only to drive the one message shown for a run; it
//! is never persisted. The flag appears in the success message and
//! nowhere else.

/// Outcome of a single submission run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Output matched and all policy checks held; reveals the flag.
    Success { flag: String },
    /// Output did not match (or a required term was silently missing);
    /// carries the normalized output as a debugging aid.
    Mismatch { output: String },
    /// A forbidden term was found; names it.
    PolicyViolation { term: String },
    /// Setup, user, or test code raised; carries the diagnostic.
    RuntimeError { message: String },
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success { .. })
    }

    /// The one message displayed for this run.
    pub fn render(&self) -> String {
        match self {
            Verdict::Success { flag } => format!("✅ SUCCESS\n{flag}"),
            Verdict::Mismatch { output } => format!("▶️ Python Output:\n{output}"),
            Verdict::PolicyViolation { term } => format!("❌ Forbidden term used: \"{term}\""),
            Verdict::RuntimeError { message } => {
                format!("⚠️ Error while running code:\n{message}")
            }
        }
    }
}
