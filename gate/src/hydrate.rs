//! Setup-code hydration: inlining file references.
//!
//! Setup source may assign a quoted file path to a variable, e.g.
//! `data = "assets/sample.txt"`. Before every run each such reference
//! is fetched and the assignment rewritten to a triple-quoted literal
//! holding the file content verbatim. A reference that does not fetch
//! stays untouched, so the run sees the original path string.
//!
//! Hydration is deliberately not cached: it re-reads the store on
//! every run.

use tracing::{debug, warn};

use crate::assets::AssetStore;

/// A `= "<path>"` occurrence found in setup source.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedAssignment {
    /// The full matched span, `=` through the closing quote.
    text: String,
    /// The quoted content, taken as a file path candidate.
    path: String,
}

/// Replace fetchable quoted-path assignments with inline literals.
///
/// Substitution is first-match-wins: each scanned occurrence replaces
/// the first remaining occurrence of its exact matched text, so
/// identical literals are rewritten in source order and a reference
/// that appears once is rewritten exactly once.
pub fn hydrate(source: &str, store: &AssetStore) -> String {
    let mut hydrated = source.to_string();
    for assignment in scan_quoted_assignments(source) {
        match store.fetch_text(&assignment.path) {
            Ok(content) => {
                debug!(path = %assignment.path, bytes = content.len(), "inlined setup reference");
                let replacement = format!("= \"\"\"{content}\"\"\"");
                hydrated = hydrated.replacen(&assignment.text, &replacement, 1);
            }
            Err(err) => {
                warn!(path = %assignment.path, %err, "setup reference not fetchable, keeping literal");
            }
        }
    }
    hydrated
}

/// Scan for `=`, optional whitespace, then a one-line double-quoted
/// string. The quoted content may not span lines or contain a quote.
fn scan_quoted_assignments(source: &str) -> Vec<QuotedAssignment> {
    let mut found = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(eq) = rest.find('=') {
        let start = offset + eq;
        let after_eq = &source[start + 1..];
        let gap = after_eq.len() - after_eq.trim_start().len();
        let quoted = &after_eq[gap..];

        if let Some(body) = quoted.strip_prefix('"')
            && let Some(close) = body.find(['"', '\n'])
            && body.as_bytes()[close] == b'"'
        {
            let end = start + 1 + gap + 1 + close + 1;
            found.push(QuotedAssignment {
                text: source[start..end].to_string(),
                path: body[..close].to_string(),
            });
            offset = end;
        } else {
            offset = start + 1;
        }
        rest = &source[offset..];
    }
    found
}
