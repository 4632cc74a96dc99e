use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::DocumentStore;

/// Overwrite an existing document. Saving never creates one; that is what
/// upload is for.
pub fn run<S: DocumentStore>(store: &S, name: &str, content: Option<&str>) -> Result<CmdResult> {
    if !store.exists(name) {
        return Err(ShelfError::NotFound(name.to_string()));
    }
    let content = content.ok_or_else(|| ShelfError::Validation("Content is missing".into()))?;

    store.write(name, content)?;
    Ok(CmdResult::new(
        name,
        CmdMessage::success("File saved successfully"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn overwrites_content() {
        let fixture = StoreFixture::new().with_doc("a.md", "old");
        let result = run(&fixture.store, "a.md", Some("new")).unwrap();
        assert_eq!(result.filename, "a.md");
        assert_eq!(fixture.store.read("a.md").unwrap(), "new");
    }

    #[test]
    fn empty_content_is_allowed() {
        let fixture = StoreFixture::new().with_doc("a.md", "old");
        run(&fixture.store, "a.md", Some("")).unwrap();
        assert_eq!(fixture.store.read("a.md").unwrap(), "");
    }

    #[test]
    fn missing_document_wins_over_missing_content() {
        let fixture = StoreFixture::new();
        assert!(matches!(
            run(&fixture.store, "ghost.md", None),
            Err(ShelfError::NotFound(_))
        ));
        assert!(!fixture.store.exists("ghost.md"));
    }

    #[test]
    fn missing_content_is_rejected() {
        let fixture = StoreFixture::new().with_doc("a.md", "keep");
        assert!(matches!(
            run(&fixture.store, "a.md", None),
            Err(ShelfError::Validation(_))
        ));
        assert_eq!(fixture.store.read("a.md").unwrap(), "keep");
    }
}
