use super::DocumentStore;
use crate::error::{Result, ShelfError};
use crate::model::DocumentEntry;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    docs: Mutex<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn docs(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.docs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DocumentStore for InMemoryStore {
    fn list(&self) -> Result<Vec<DocumentEntry>> {
        Ok(self
            .docs()
            .iter()
            .map(|(name, content)| DocumentEntry {
                name: name.clone(),
                size: content.len() as u64,
            })
            .collect())
    }

    fn read(&self, name: &str) -> Result<String> {
        self.docs()
            .get(name)
            .cloned()
            .ok_or_else(|| ShelfError::NotFound(name.to_string()))
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        self.docs().insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        if self.docs().remove(name).is_none() {
            return Err(ShelfError::NotFound(name.to_string()));
        }
        Ok(())
    }

    fn rename(&self, old: &str, new: &str) -> Result<()> {
        let mut docs = self.docs();
        if !docs.contains_key(old) {
            return Err(ShelfError::NotFound(old.to_string()));
        }
        if docs.contains_key(new) {
            return Err(ShelfError::AlreadyExists(new.to_string()));
        }
        if let Some(content) = docs.remove(old) {
            docs.insert(new.to_string(), content);
        }
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.docs().contains_key(name)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_doc(self, name: &str, content: &str) -> Self {
            self.store.write(name, content).unwrap();
            self
        }

        pub fn with_docs(self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("doc-{}.md", i + 1);
                let content = format!("# Document {}\n", i + 1);
                self.store.write(&name, &content).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn lists_in_name_order() {
        let fixture = StoreFixture::new()
            .with_doc("b.md", "b")
            .with_doc("a.md", "aaa");
        let names: Vec<_> = fixture
            .store
            .list()
            .unwrap()
            .into_iter()
            .map(|e| (e.name, e.size))
            .collect();
        assert_eq!(names, vec![("a.md".into(), 3), ("b.md".into(), 1)]);
    }

    #[test]
    fn rename_conflict_leaves_source() {
        let fixture = StoreFixture::new().with_docs(2);
        let err = fixture.store.rename("doc-1.md", "doc-2.md").unwrap_err();
        assert!(matches!(err, ShelfError::AlreadyExists(_)));
        assert_eq!(fixture.store.read("doc-1.md").unwrap(), "# Document 1\n");
    }
}
