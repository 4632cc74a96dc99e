use crate::diff::{build_diff_with, DiffOptions};
use crate::error::{Result, ShelfError};
use crate::model::DiffPayload;
use crate::store::DocumentStore;

/// Diff two stored documents. Both must exist.
pub fn stored<S: DocumentStore>(
    store: &S,
    before: &str,
    after: &str,
    options: DiffOptions,
) -> Result<DiffPayload> {
    for name in [before, after] {
        if !store.exists(name) {
            return Err(ShelfError::NotFound(name.to_string()));
        }
    }
    let before_raw = store.read(before)?;
    let after_raw = store.read(after)?;
    Ok(build_diff_with(
        &before_raw,
        &after_raw,
        before,
        after,
        options,
    ))
}

/// Diff two buffers that were never saved.
pub fn preview(
    before_raw: &str,
    after_raw: &str,
    before_name: &str,
    after_name: &str,
    options: DiffOptions,
) -> DiffPayload {
    build_diff_with(before_raw, after_raw, before_name, after_name, options)
}
