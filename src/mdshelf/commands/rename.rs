use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::sanitize::sanitize;
use crate::store::DocumentStore;

/// Rename `name` to the sanitized form of `new_name`.
///
/// Failure order: missing source, then missing or unusable new name, then a
/// taken target. The store repeats the existence checks right before it
/// renames.
pub fn run<S: DocumentStore>(
    store: &S,
    ext: &str,
    name: &str,
    new_name: Option<&str>,
) -> Result<CmdResult> {
    if !store.exists(name) {
        return Err(ShelfError::NotFound(name.to_string()));
    }

    let new_name = new_name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ShelfError::Validation("New name is not specified".into()))?;
    let target = sanitize(new_name, ext, true)?;

    if store.exists(&target) {
        return Err(ShelfError::AlreadyExists(target));
    }

    store.rename(name, &target)?;
    Ok(CmdResult::new(
        target,
        CmdMessage::success("File renamed successfully"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    const EXT: &str = ".md";

    #[test]
    fn renames_and_appends_extension() {
        let fixture = StoreFixture::new().with_doc("draft.md", "body");
        let result = run(&fixture.store, EXT, "draft.md", Some("final")).unwrap();
        assert_eq!(result.filename, "final.md");
        assert!(!fixture.store.exists("draft.md"));
        assert_eq!(fixture.store.read("final.md").unwrap(), "body");
    }

    #[test]
    fn target_taken_is_a_conflict_and_source_survives() {
        let fixture = StoreFixture::new()
            .with_doc("a.md", "A")
            .with_doc("b.md", "B");
        let err = run(&fixture.store, EXT, "a.md", Some("b.md")).unwrap_err();
        assert!(matches!(err, ShelfError::AlreadyExists(ref n) if n == "b.md"));
        assert_eq!(fixture.store.read("a.md").unwrap(), "A");
        assert_eq!(fixture.store.read("b.md").unwrap(), "B");
    }

    #[test]
    fn renaming_onto_itself_is_a_conflict() {
        let fixture = StoreFixture::new().with_doc("a.md", "A");
        assert!(matches!(
            run(&fixture.store, EXT, "a.md", Some("a")),
            Err(ShelfError::AlreadyExists(_))
        ));
    }

    #[test]
    fn missing_source_is_reported_before_missing_name() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.store, EXT, "ghost.md", None),
            Err(ShelfError::NotFound(_))
        ));
    }

    #[test]
    fn missing_new_name_is_rejected() {
        let fixture = StoreFixture::new().with_doc("a.md", "A");
        for new_name in [None, Some("")] {
            assert!(matches!(
                run(&fixture.store, EXT, "a.md", new_name),
                Err(ShelfError::Validation(_))
            ));
        }
        assert!(fixture.store.exists("a.md"));
    }

    #[test]
    fn traversal_in_new_name_stays_in_root() {
        let fixture = StoreFixture::new().with_doc("a.md", "A");
        let result = run(&fixture.store, EXT, "a.md", Some("../../outside")).unwrap();
        assert_eq!(result.filename, "outside.md");
    }
}
