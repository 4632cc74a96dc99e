use clap::Parser;
use mdshelf::config::{ShelfConfig, DEFAULT_BIND, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_ROOT};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdshelf")]
#[command(about = "Browse, edit and diff a folder of Markdown documents", long_about = None)]
pub struct Cli {
    /// Directory holding the documents (created if missing)
    #[arg(short, long, env = "UPLOAD_FOLDER", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "MDSHELF_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "MAX_CONTENT_LENGTH", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> ShelfConfig {
        ShelfConfig::new(&self.root)
            .with_bind(self.bind)
            .with_max_upload_bytes(self.max_upload_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config() {
        let cli = Cli::try_parse_from(["mdshelf"]).unwrap();
        let config = cli.config();
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "mdshelf",
            "--root",
            "/srv/docs",
            "--bind",
            "0.0.0.0:8080",
            "--max-upload-bytes",
            "2048",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.root, PathBuf::from("/srv/docs"));
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.max_upload_bytes, 2048);
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["mdshelf", "--bind", "nowhere"]).is_err());
    }
}
