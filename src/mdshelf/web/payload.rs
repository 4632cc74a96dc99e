//! Request and response bodies, one struct per endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    #[serde(default)]
    pub new_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DiffQuery {
    pub before: Option<String>,
    pub after: Option<String>,
    #[serde(default)]
    pub full: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewRequest {
    pub before_content: Option<String>,
    pub after_content: Option<String>,
    pub before_name: Option<String>,
    pub after_name: Option<String>,
    pub full_context: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameResponse {
    pub message: String,
    pub new_name: String,
}
