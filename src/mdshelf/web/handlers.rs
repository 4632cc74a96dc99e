use super::error::ApiError;
use super::payload::{
    DiffQuery, MessageResponse, PreviewRequest, RenameRequest, RenameResponse, SaveRequest,
    UploadResponse,
};
use super::AppState;
use crate::api::ShelfApi;
use crate::commands::upload::Upload;
use crate::commands::{CmdResult, MessageLevel};
use crate::diff::DiffOptions;
use crate::error::{Result, ShelfError};
use crate::model::{DiffPayload, Document, DocumentEntry};
use crate::store::DocumentStore;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::response::Html;
use axum::Json;
use std::sync::Arc;
use tracing::{debug, info, warn};

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Run a storage operation on the blocking pool.
async fn blocking<S, T, F>(state: &AppState<S>, op: F) -> std::result::Result<T, ApiError>
where
    S: DocumentStore + 'static,
    T: Send + 'static,
    F: FnOnce(&ShelfApi<S>) -> Result<T> + Send + 'static,
{
    let api = Arc::clone(&state.api);
    let outcome = tokio::task::spawn_blocking(move || op(&api)).await?;
    Ok(outcome?)
}

fn log_result(action: &str, result: &CmdResult) {
    let text = &result.message.content;
    match result.message.level {
        MessageLevel::Warning => warn!(file = %result.filename, "{}: {}", action, text),
        MessageLevel::Success => info!(file = %result.filename, "{}: {}", action, text),
    }
}

/// Bodies that fail to parse are treated as empty, so the handler can still
/// report a missing document before complaining about the payload.
fn body_or_default<T: Default>(body: std::result::Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!(error = %rejection, "ignoring unreadable request body");
            T::default()
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn list_files<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
) -> std::result::Result<Json<Vec<DocumentEntry>>, ApiError> {
    let files = blocking(&state, |api| api.list_documents()).await?;
    Ok(Json(files))
}

pub async fn upload_file<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut file: Option<(String, Bytes)> = None;
    let mut new_filename: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                file = Some((filename, bytes));
            }
            Some("newFilename") => new_filename = Some(field.text().await?),
            _ => debug!(field = ?field_name, "ignoring unexpected multipart field"),
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| ShelfError::Validation("No file part in the request".into()))?;

    let result = blocking(&state, move |api| {
        api.upload_document(Upload {
            filename: &filename,
            new_filename: new_filename.as_deref(),
            content: &bytes,
        })
    })
    .await?;

    log_result("upload", &result);
    Ok(Json(UploadResponse {
        message: result.message.content,
        filename: result.filename,
    }))
}

pub async fn get_file<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
) -> std::result::Result<Json<Document>, ApiError> {
    let doc = blocking(&state, move |api| api.get_document(&name)).await?;
    Ok(Json(doc))
}

pub async fn save_file<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
    body: std::result::Result<Json<SaveRequest>, JsonRejection>,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    let SaveRequest { content } = body_or_default(body);
    let result = blocking(&state, move |api| {
        api.save_document(&name, content.as_deref())
    })
    .await?;

    log_result("save", &result);
    Ok(Json(MessageResponse {
        message: result.message.content,
    }))
}

pub async fn delete_file<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
) -> std::result::Result<Json<MessageResponse>, ApiError> {
    let result = blocking(&state, move |api| api.delete_document(&name)).await?;

    log_result("delete", &result);
    Ok(Json(MessageResponse {
        message: result.message.content,
    }))
}

pub async fn rename_file<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(name): Path<String>,
    body: std::result::Result<Json<RenameRequest>, JsonRejection>,
) -> std::result::Result<Json<RenameResponse>, ApiError> {
    let RenameRequest { new_name } = body_or_default(body);
    let result = blocking(&state, move |api| {
        api.rename_document(&name, new_name.as_deref())
    })
    .await?;

    log_result("rename", &result);
    Ok(Json(RenameResponse {
        message: result.message.content,
        new_name: result.filename,
    }))
}

pub async fn diff_files<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    query: std::result::Result<Query<DiffQuery>, QueryRejection>,
) -> std::result::Result<Json<DiffPayload>, ApiError> {
    let Query(query) = query?;
    let options = if query.full {
        DiffOptions::full()
    } else {
        DiffOptions::default()
    };

    let payload = blocking(&state, move |api| {
        api.diff_documents(query.before.as_deref(), query.after.as_deref(), options)
    })
    .await?;
    Ok(Json(payload))
}

pub async fn diff_preview<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    body: std::result::Result<Json<PreviewRequest>, JsonRejection>,
) -> std::result::Result<Json<DiffPayload>, ApiError> {
    let req = body_or_default(body);
    let options = if req.full_context {
        DiffOptions::full()
    } else {
        DiffOptions::default()
    };

    let payload = blocking(&state, move |api| {
        Ok(api.diff_preview(
            req.before_content.as_deref().unwrap_or_default(),
            req.after_content.as_deref().unwrap_or_default(),
            req.before_name.as_deref(),
            req.after_name.as_deref(),
            options,
        ))
    })
    .await?;
    Ok(Json(payload))
}
