use serde::{Deserialize, Serialize};

/// A stored document as returned by the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub name: String,
    pub size: u64,
}

/// A document's raw text together with its rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "filename")]
    pub name: String,
    pub raw_content: String,
    pub html_content: String,
}

/// Both sides of a comparison plus the rendered line diff table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPayload {
    pub before: Document,
    pub after: Document,
    pub raw_diff_html: String,
}
