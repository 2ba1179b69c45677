//! Filename sanitization for uploaded documents.

/// Fallback when sanitization leaves nothing usable.
const FALLBACK: &str = "file";

/// Collapse a client-supplied filename to a safe storage name.
///
/// Only the final path component is kept (both `/` and `\` count as
/// separators, whatever the client's platform), every character outside
/// `[A-Za-z0-9._-]` becomes a single `_`, and leading dots are dropped
/// so the result can never be a dotfile or a traversal component.
pub fn sanitize(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    let mut last_was_replacement = false;
    for c in base.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
            last_was_replacement = false;
        } else if !last_was_replacement {
            out.push('_');
            last_was_replacement = true;
        }
    }

    let out = out.trim_start_matches('.');
    if out.chars().all(|c| c == '_') {
        // Empty, or nothing but replacement characters survived.
        FALLBACK.to_string()
    } else {
        out.to_string()
    }
}
