use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S, name: &str) -> Result<CmdResult> {
    store.delete(name)?;
    Ok(CmdResult::new(
        name,
        CmdMessage::success("File deleted successfully"),
    ))
}
