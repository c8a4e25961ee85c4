//! The submission evaluation pipeline.
//!
//! One run is a fixed sequence: hydrate and execute setup code, check
//! forbidden terms, check required terms, execute the submission,
//! execute the test expression, then normalize and compare. Ordering
//! is a contract: setup has already executed by the time the forbidden
//! check fires (so a grader's setup cannot be bypassed by tripping the
//! check early), and a missing required term never aborts — the
//! learner still sees their output, only success is withheld.
//!
//! Every failure is caught here and becomes a [`Verdict`]; nothing
//! escapes the run boundary. A failed run may leave partial bindings
//! in the shared interpreter namespace; the next run sees them. That
//! accumulation is an intentional property of the session.

use tracing::{debug, info, instrument};

use crate::assets::AssetStore;
use crate::compare::{normalize, values_equal};
use crate::engine::Interpreter;
use crate::hydrate::hydrate;
use crate::policy::{first_forbidden, has_all_required};
use crate::session::Session;
use crate::verdict::Verdict;

/// Run one submission against a loaded session.
#[instrument(skip_all, fields(challenge_id = %session.challenge.id))]
pub fn run_submission(
    session: &Session,
    user_code: &str,
    interpreter: &dyn Interpreter,
    store: &AssetStore,
) -> Verdict {
    info!("run started");

    // Step 1: setup. Hydrated fresh every run, never cached.
    let setup_code = hydrate(&session.challenge.setup_code, store);
    if !setup_code.is_empty()
        && let Err(err) = interpreter.execute(&setup_code)
    {
        info!(%err, "setup code failed");
        return Verdict::RuntimeError {
            message: err.to_string(),
        };
    }

    // Step 2: forbidden terms short-circuit the rest of the run.
    if let Some(term) = first_forbidden(user_code, &session.challenge.forbidden_terms) {
        info!(term, "forbidden term in submission");
        return Verdict::PolicyViolation {
            term: term.to_string(),
        };
    }

    // Step 3: required terms are recorded, never aborting.
    let required_ok = has_all_required(user_code, &session.challenge.required_terms);
    if !required_ok {
        debug!("required term missing, success suppressed");
    }

    // Step 4: the submission itself.
    if let Err(err) = interpreter.execute(user_code) {
        info!(%err, "submission failed");
        return Verdict::RuntimeError {
            message: err.to_string(),
        };
    }

    // Step 5: the test expression produces the judged value.
    let judged = match interpreter.execute(&session.test_code) {
        Ok(Some(value)) => value,
        Ok(None) => {
            info!("test code produced no value");
            return Verdict::RuntimeError {
                message: format!("test code {:?} produced no value", session.test_code),
            };
        }
        Err(err) => {
            info!(%err, "test code failed");
            return Verdict::RuntimeError {
                message: err.to_string(),
            };
        }
    };

    // Step 6: normalize and compare.
    let output = normalize(&judged);
    let verdict = if required_ok && values_equal(&judged, &session.expected) {
        Verdict::Success {
            flag: session.challenge.flag.clone(),
        }
    } else {
        Verdict::Mismatch { output }
    };
    info!(success = verdict.is_success(), "run finished");
    verdict
}
