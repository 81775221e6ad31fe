//! File-backed document store.
//!
//! Every document is a JSON file in a sharded directory derived from its [`RecordId`]:
//!
//! ```text
//! <patient_data_dir>/
//!   patients/
//!     <s1>/<s2>/<id>/document.json
//!   tests/
//!     <s1>/<s2>/<id>/document.json
//! ```
//!
//! A single write replaces `document.json` through a rename, so readers see either the old or
//! the new document. Sequences touching more than one document must hold
//! [`DocumentStore::exclusive`] for their whole duration.

use crate::config::CoreConfig;
use crate::constants::DOCUMENT_FILENAME;
use crate::uuid::RecordId;
use crate::{RecordError, RecordResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// A type stored as one JSON document in a named collection.
pub trait Document: Serialize + DeserializeOwned {
    /// Directory name of the collection under the store root.
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;
}

#[derive(Debug)]
pub struct DocumentStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    /// Opens the store rooted at the configured data directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::StorageDirCreation`] if the root cannot be created.
    pub fn open(cfg: &CoreConfig) -> RecordResult<Self> {
        let root = cfg.patient_data_dir().to_path_buf();
        fs::create_dir_all(&root).map_err(RecordError::StorageDirCreation)?;

        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Takes the process-wide write lock.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::LockPoisoned`] if a previous holder panicked.
    pub fn exclusive(&self) -> RecordResult<MutexGuard<'_, ()>> {
        self.write_lock.lock().map_err(|_| RecordError::LockPoisoned)
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    fn document_dir<D: Document>(&self, id: &RecordId) -> PathBuf {
        id.sharded_dir(&self.collection_dir(D::COLLECTION))
    }

    /// Stores a new document.
    ///
    /// # Errors
    ///
    /// Returns `RecordError` if:
    /// - a document with the same id already exists ([`RecordError::DocumentExists`]),
    /// - the shard directories cannot be created,
    /// - the document cannot be serialised or written.
    pub fn insert<D: Document>(&self, doc: &D) -> RecordResult<()> {
        let dir = self.document_dir::<D>(doc.id());

        if let Some(parent) = dir.parent() {
            fs::create_dir_all(parent).map_err(RecordError::StorageDirCreation)?;
        }

        match fs::create_dir(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(RecordError::DocumentExists {
                    collection: D::COLLECTION,
                    id: doc.id().to_string(),
                });
            }
            Err(e) => return Err(RecordError::StorageDirCreation(e)),
        }

        Self::write_document(&dir, doc)
    }

    /// Loads a document, or `None` when no document has this id.
    pub fn find_by_id<D: Document>(&self, id: &RecordId) -> RecordResult<Option<D>> {
        let path = self.document_dir::<D>(id).join(DOCUMENT_FILENAME);

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map(Some)
                .map_err(RecordError::Deserialization),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RecordError::FileRead(e)),
        }
    }

    /// Loads every document of a collection, ordered by id.
    ///
    /// Documents that cannot be read or parsed are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::FileRead`] if the collection directory exists but cannot be read.
    pub fn find_all<D: Document>(&self) -> RecordResult<Vec<D>> {
        let collection_dir = self.collection_dir(D::COLLECTION);

        let mut documents: Vec<D> = Vec::new();

        let s1_iter = match fs::read_dir(&collection_dir) {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(documents),
            Err(e) => return Err(RecordError::FileRead(e)),
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };

            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };

                for id_ent in id_iter.flatten() {
                    let document_path = id_ent.path().join(DOCUMENT_FILENAME);
                    if !document_path.is_file() {
                        continue;
                    }

                    match fs::read_to_string(&document_path) {
                        Ok(contents) => match serde_json::from_str::<D>(&contents) {
                            Ok(doc) => documents.push(doc),
                            Err(e) => {
                                tracing::warn!(
                                    "failed to parse document: {} - {}",
                                    document_path.display(),
                                    e
                                );
                            }
                        },
                        Err(e) => {
                            tracing::warn!(
                                "failed to read document: {} - {}",
                                document_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        documents.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(documents)
    }

    /// Loads every document of a collection matching `predicate`, ordered by id.
    pub fn find_where<D, F>(&self, predicate: F) -> RecordResult<Vec<D>>
    where
        D: Document,
        F: Fn(&D) -> bool,
    {
        let mut documents = self.find_all::<D>()?;
        documents.retain(|doc| predicate(doc));
        Ok(documents)
    }

    /// Replaces an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DocumentMissing`] if the document was deleted in the meantime, or
    /// an I/O/serialisation error.
    pub fn save<D: Document>(&self, doc: &D) -> RecordResult<()> {
        let dir = self.document_dir::<D>(doc.id());
        if !dir.is_dir() {
            return Err(RecordError::DocumentMissing {
                collection: D::COLLECTION,
                id: doc.id().to_string(),
            });
        }

        Self::write_document(&dir, doc)
    }

    /// Removes a document. Returns `false` if there was nothing to remove.
    pub fn delete<D: Document>(&self, id: &RecordId) -> RecordResult<bool> {
        let dir = self.document_dir::<D>(id);

        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(RecordError::FileRemove(e)),
        }
    }

    fn write_document<D: Document>(dir: &Path, doc: &D) -> RecordResult<()> {
        let json = serde_json::to_string_pretty(doc).map_err(RecordError::Serialization)?;

        let tmp_path = dir.join(format!(".{}.{}.tmp", DOCUMENT_FILENAME, RecordId::new()));
        fs::write(&tmp_path, json).map_err(RecordError::FileWrite)?;

        if let Err(e) = fs::rename(&tmp_path, dir.join(DOCUMENT_FILENAME)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RecordError::FileWrite(e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "_id")]
        id: RecordId,
        text: String,
    }

    impl Document for Note {
        const COLLECTION: &'static str = "notes";

        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    fn note(text: &str) -> Note {
        Note {
            id: RecordId::new(),
            text: text.into(),
        }
    }

    fn test_store(dir: &Path) -> DocumentStore {
        let cfg = CoreConfig::new(dir.join("data")).expect("CoreConfig::new should succeed");
        DocumentStore::open(&cfg).expect("open should succeed")
    }

    #[test]
    fn test_open_creates_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());

        assert!(store.root().is_dir());
    }

    #[test]
    fn test_insert_writes_sharded_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let doc = note("hello");

        store.insert(&doc).expect("insert should succeed");

        let path = doc
            .id
            .sharded_dir(&store.root().join("notes"))
            .join(DOCUMENT_FILENAME);
        assert!(path.is_file(), "document.json should exist");

        let found: Option<Note> = store.find_by_id(&doc.id).expect("find should succeed");
        assert_eq!(found, Some(doc));
    }

    #[test]
    fn test_insert_rejects_existing_id() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let doc = note("once");

        store.insert(&doc).expect("first insert should succeed");
        let err = store.insert(&doc).expect_err("second insert should fail");

        assert!(matches!(err, RecordError::DocumentExists { .. }));
    }

    #[test]
    fn test_find_by_id_returns_none_when_absent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());

        let found: Option<Note> = store.find_by_id(&RecordId::new()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_find_all_is_empty_for_new_store() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());

        let all: Vec<Note> = store.find_all().unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_find_all_orders_by_id_and_skips_invalid_documents() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());

        let a = note("a");
        let b = note("b");
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();

        let broken = RecordId::new().sharded_dir(&store.root().join("notes"));
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join(DOCUMENT_FILENAME), "{ not json").unwrap();

        let all: Vec<Note> = store.find_all().unwrap();
        assert_eq!(all.len(), 2, "broken document should be skipped");
        assert!(all[0].id < all[1].id);
    }

    #[test]
    fn test_find_where_filters() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        store.insert(&note("keep")).unwrap();
        store.insert(&note("drop")).unwrap();

        let kept: Vec<Note> = store.find_where(|n: &Note| n.text == "keep").unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].text, "keep");
    }

    #[test]
    fn test_save_replaces_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let mut doc = note("before");
        store.insert(&doc).unwrap();

        doc.text = "after".into();
        store.save(&doc).expect("save should succeed");

        let found: Note = store.find_by_id(&doc.id).unwrap().unwrap();
        assert_eq!(found.text, "after");

        let dir = doc.id.sharded_dir(&store.root().join("notes"));
        let leftovers = fs::read_dir(&dir).unwrap().count();
        assert_eq!(leftovers, 1, "no temp files should remain");
    }

    #[test]
    fn test_save_after_delete_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());
        let doc = note("gone");
        store.insert(&doc).unwrap();

        assert!(store.delete::<Note>(&doc.id).unwrap());
        let err = store.save(&doc).expect_err("save should fail");
        assert!(matches!(err, RecordError::DocumentMissing { .. }));
    }

    #[test]
    fn test_delete_reports_missing_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = test_store(temp_dir.path());

        assert!(!store.delete::<Note>(&RecordId::new()).unwrap());
    }
}
