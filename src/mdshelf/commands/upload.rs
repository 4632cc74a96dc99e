use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::sanitize::{has_allowed_extension, sanitize};
use crate::store::DocumentStore;

/// An incoming upload, straight from the request.
#[derive(Debug, Clone, Copy)]
pub struct Upload<'a> {
    /// Client-side filename of the uploaded part.
    pub filename: &'a str,
    /// Name chosen by the user after a conflict. Overwrites without asking.
    pub new_filename: Option<&'a str>,
    pub content: &'a [u8],
}

pub fn run<S: DocumentStore>(store: &S, ext: &str, upload: Upload<'_>) -> Result<CmdResult> {
    if upload.filename.is_empty() {
        return Err(ShelfError::Validation("No file selected".into()));
    }
    if !has_allowed_extension(upload.filename, ext) {
        return Err(ShelfError::Validation(format!(
            "Invalid file format. Only {} files are allowed",
            ext
        )));
    }
    let content = std::str::from_utf8(upload.content)
        .map_err(|_| ShelfError::Validation("File is not valid UTF-8 text".into()))?;

    let explicit = upload.new_filename.filter(|n| !n.is_empty());
    let name = match explicit {
        Some(new_name) => sanitize(new_name, ext, true)?,
        None => sanitize(upload.filename, ext, true)?,
    };

    let existed = store.exists(&name);
    if existed && explicit.is_none() {
        return Err(ShelfError::FileExists(name));
    }

    store.write(&name, content)?;

    let message = if existed {
        CmdMessage::warning("File uploaded successfully, replacing the existing copy")
    } else {
        CmdMessage::success("File uploaded successfully")
    };
    Ok(CmdResult::new(name, message))
}
