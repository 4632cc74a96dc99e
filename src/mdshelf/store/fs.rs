use super::DocumentStore;
use crate::error::{Result, ShelfError};
use crate::model::DocumentEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".md".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn not_found_as(name: &str) -> impl FnOnce(std::io::Error) -> ShelfError + '_ {
        move |e| {
            if e.kind() == ErrorKind::NotFound {
                ShelfError::NotFound(name.to_string())
            } else {
                ShelfError::Io(e)
            }
        }
    }
}

impl DocumentStore for FileStore {
    fn list(&self) -> Result<Vec<DocumentEntry>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !name.ends_with(&self.file_ext) {
                continue;
            }
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            entries.push(DocumentEntry {
                name,
                size: meta.len(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read(&self, name: &str) -> Result<String> {
        let bytes = fs::read(self.path_for(name)).map_err(Self::not_found_as(name))?;
        String::from_utf8(bytes).map_err(|e| {
            ShelfError::Io(std::io::Error::new(ErrorKind::InvalidData, e.utf8_error()))
        })
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        let target = self.path_for(name);

        // Atomic write: a crash mid-write leaves only a hidden tmp file behind.
        let tmp_path = self.root.join(format!(".{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(ShelfError::NotFound(name.to_string()));
        }
        fs::remove_file(path).map_err(Self::not_found_as(name))
    }

    fn rename(&self, old: &str, new: &str) -> Result<()> {
        let old_path = self.path_for(old);
        let new_path = self.path_for(new);

        if !old_path.is_file() {
            return Err(ShelfError::NotFound(old.to_string()));
        }
        if new_path.exists() {
            return Err(ShelfError::AlreadyExists(new.to_string()));
        }
        fs::rename(old_path, new_path).map_err(Self::not_found_as(old))
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn write_then_read_round_trips() {
        let (_dir, store) = setup();
        let text = "# Заголовок\n\n```rust\nfn main() {}\n```\n\u{1F980} tail without newline";
        store.write("a.md", text).unwrap();
        assert_eq!(store.read("a.md").unwrap(), text);
    }

    #[test]
    fn write_overwrites_and_leaves_no_tmp_files() {
        let (dir, store) = setup();
        store.write("a.md", "first").unwrap();
        store.write("a.md", "second").unwrap();
        assert_eq!(store.read("a.md").unwrap(), "second");

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn list_is_sorted_and_filtered() {
        let (dir, store) = setup();
        store.write("b.md", "bb").unwrap();
        store.write("a.md", "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(
            listed,
            vec![
                DocumentEntry {
                    name: "a.md".into(),
                    size: 1
                },
                DocumentEntry {
                    name: "b.md".into(),
                    size: 2
                },
            ]
        );
    }

    #[test]
    fn list_on_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nope"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn read_missing_is_not_found() {
        let (_dir, store) = setup();
        assert!(matches!(store.read("nope.md"), Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn read_invalid_utf8_is_io_error() {
        let (dir, store) = setup();
        fs::write(dir.path().join("bin.md"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(store.read("bin.md"), Err(ShelfError::Io(_))));
    }

    #[test]
    fn delete_removes_file() {
        let (_dir, store) = setup();
        store.write("a.md", "x").unwrap();
        store.delete("a.md").unwrap();
        assert!(!store.exists("a.md"));
        assert!(matches!(store.delete("a.md"), Err(ShelfError::NotFound(_))));
    }

    #[test]
    fn rename_moves_content() {
        let (_dir, store) = setup();
        store.write("old.md", "body").unwrap();
        store.rename("old.md", "new.md").unwrap();
        assert!(!store.exists("old.md"));
        assert_eq!(store.read("new.md").unwrap(), "body");
    }

    #[test]
    fn rename_onto_existing_target_keeps_both() {
        let (_dir, store) = setup();
        store.write("a.md", "A").unwrap();
        store.write("b.md", "B").unwrap();
        assert!(matches!(
            store.rename("a.md", "b.md"),
            Err(ShelfError::AlreadyExists(_))
        ));
        assert_eq!(store.read("a.md").unwrap(), "A");
        assert_eq!(store.read("b.md").unwrap(), "B");
    }

    #[test]
    fn rename_missing_source_is_not_found() {
        let (_dir, store) = setup();
        assert!(matches!(
            store.rename("ghost.md", "b.md"),
            Err(ShelfError::NotFound(_))
        ));
    }

    #[test]
    fn file_ext_is_normalized() {
        let store = FileStore::new(PathBuf::from("/tmp")).with_file_ext("txt");
        assert_eq!(store.file_ext(), ".txt");
    }
}
