use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Filename is empty after sanitization")]
    EmptyName,

    #[error("{0}")]
    Validation(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("A file named \"{0}\" already exists")]
    AlreadyExists(String),

    /// Upload target is taken and the client did not supply an alternative name.
    #[error("file_exists")]
    FileExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
