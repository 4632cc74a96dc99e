//! # Filename Sanitization
//!
//! Every name that reaches the storage layer passes through [`sanitize`] first.
//! Untrusted input (multipart filenames, URL path segments, JSON fields) is
//! reduced to a single ASCII path component that cannot leave the storage root.
//!
//! The transform:
//!
//! 1. decomposes to NFKD and drops what is left outside ASCII (`é` keeps its `e`)
//! 2. turns `/` and `\` into spaces, then joins whitespace runs with `_`
//! 3. removes everything outside `[A-Za-z0-9_.-]`
//! 4. trims leading and trailing `.` and `_`
//!
//! The extension check runs before and after the transform, since stripping
//! can eat the extension (`".md"` trims down to `"md"`).
//!
//! Different inputs can collapse to the same name (`"a b.md"` and `"a_b.md"`).
//! That is not prevented here; callers detect collisions with an existence check.

use crate::error::{Result, ShelfError};
use unicode_normalization::UnicodeNormalization;

/// Reduce `name` to a safe basename.
///
/// With `enforce_ext`, the result always ends with `ext` (e.g. `".md"`); a
/// differently cased variant (`.MD`) is rewritten to `ext` itself.
pub fn sanitize(name: &str, ext: &str, enforce_ext: bool) -> Result<String> {
    let mut target = name.to_string();
    if enforce_ext && !target.is_empty() {
        target = with_extension(target, ext);
    }

    let mut cleaned = secure_basename(&target);
    if enforce_ext && !cleaned.is_empty() {
        cleaned = with_extension(cleaned, ext);
    }

    if cleaned.is_empty() {
        return Err(ShelfError::EmptyName);
    }
    Ok(cleaned)
}

/// Upload gate: the name must carry a suffix equal to `ext`, ignoring case.
pub fn has_allowed_extension(name: &str, ext: &str) -> bool {
    let wanted = ext.trim_start_matches('.');
    match name.rsplit_once('.') {
        Some((_, suffix)) => suffix.eq_ignore_ascii_case(wanted),
        None => false,
    }
}

fn with_extension(mut name: String, ext: &str) -> String {
    let split = name.len().checked_sub(ext.len());
    match split {
        Some(at) if name.is_char_boundary(at) && name[at..].eq_ignore_ascii_case(ext) => {
            name.replace_range(at.., ext);
            name
        }
        _ => {
            name.push_str(ext);
            name
        }
    }
}

fn secure_basename(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
