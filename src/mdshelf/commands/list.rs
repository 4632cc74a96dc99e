use crate::error::Result;
use crate::model::DocumentEntry;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &S) -> Result<Vec<DocumentEntry>> {
    store.list()
}
