//! Lexical policy checks on the raw submission text.
//!
//! Both checks are case-insensitive substring searches. A forbidden
//! hit aborts the run and names the term; a missing required term is
//! silent and only withholds success (deliberate anti-gaming choice:
//! the learner is never told which term was missing).

/// First forbidden term found in the submission, in list order.
///
/// Empty terms are skipped.
pub fn first_forbidden<'a>(code: &str, terms: &'a [String]) -> Option<&'a str> {
    let lowered = code.to_lowercase();
    terms
        .iter()
        .map(String::as_str)
        .find(|term| !term.is_empty() && lowered.contains(&term.to_lowercase()))
}

/// True iff every non-empty required term appears in the submission.
pub fn has_all_required(code: &str, terms: &[String]) -> bool {
    let lowered = code.to_lowercase();
    terms
        .iter()
        .all(|term| term.is_empty() || lowered.contains(&term.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn forbidden_match_is_case_insensitive() {
        let forbidden = terms(&["eval", "exec"]);
        assert_eq!(first_forbidden("x = EVAL('1')", &forbidden), Some("eval"));
        assert_eq!(first_forbidden("x = Exec(f)", &forbidden), Some("exec"));
        assert_eq!(first_forbidden("x = 1", &forbidden), None);
    }

    #[test]
    fn first_forbidden_term_wins_in_list_order() {
        let forbidden = terms(&["while", "for"]);
        // Both present; list order decides which is reported.
        assert_eq!(
            first_forbidden("for i in x:\n    while True: pass", &forbidden),
            Some("while")
        );
    }

    #[test]
    fn empty_forbidden_terms_are_skipped() {
        let forbidden = terms(&["", "eval"]);
        assert_eq!(first_forbidden("plain code", &forbidden), None);
        assert_eq!(first_forbidden("eval(x)", &forbidden), Some("eval"));
    }

    #[test]
    fn required_needs_every_term() {
        let required = terms(&["def", "return"]);
        assert!(has_all_required("def f():\n    return 1", &required));
        assert!(!has_all_required("def f():\n    pass", &required));
        assert!(has_all_required("DEF f(): RETURN 1", &required));
    }

    #[test]
    fn empty_required_list_always_passes() {
        assert!(has_all_required("anything", &[]));
        assert!(has_all_required("anything", &terms(&[""])));
    }
}
