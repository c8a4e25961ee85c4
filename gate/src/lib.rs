//! Flag-gated coding-challenge runner.
//!
//! Loads a challenge definition from a content root, executes a
//! learner's submission inside the embedded Python interpreter, and
//! judges the captured result against an expected output. The reward
//! flag is revealed only on a policy-compliant, matching run.
//!
//! Module map, leaf first:
//!
//! - [`assets`]: content-root-relative text fetches.
//! - [`catalog`]: challenge records and catalog lookup.
//! - [`session`]: one loaded challenge with its resolved expected value.
//! - [`hydrate`]: inlining of file references in setup code.
//! - [`policy`]: forbidden/required term checks on submissions.
//! - [`compare`]: output normalization and equality.
//! - [`verdict`]: per-run outcomes and their display messages.
//! - [`pipeline`]: the ordered setup / policy / execute / judge run.
//! - [`engine`]: the interpreter seam the pipeline executes against.

pub mod assets;
pub mod catalog;
pub mod cli;
pub mod compare;
pub mod config;
pub mod engine;
pub mod exit_codes;
pub mod hydrate;
pub mod logging;
pub mod pipeline;
pub mod policy;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod verdict;
