use crate::error::Result;
use crate::model::Document;
use crate::render::render_markdown;
use crate::store::DocumentStore;

/// Fetch a document and render it.
pub fn run<S: DocumentStore>(store: &S, name: &str) -> Result<Document> {
    let raw_content = store.read(name)?;
    let html_content = render_markdown(&raw_content);
    Ok(Document {
        name: name.to_string(),
        raw_content,
        html_content,
    })
}
