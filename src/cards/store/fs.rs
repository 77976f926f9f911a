use super::table::RecordTable;
use super::{DocId, DocumentStore, Record};
use crate::error::{CardsError, Result};
use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// A document collection kept in a single JSON file.
///
/// The file is opened (and created if missing) by [`FileStore::open`] and the
/// handle is held until [`DocumentStore::close`] or drop. All records are kept
/// in memory; each mutation rewrites the file in place.
pub struct FileStore {
    path: PathBuf,
    file: File,
    table: RecordTable,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| storage_error(&path, "create", e))?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| storage_error(&path, "open", e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| storage_error(&path, "read", e))?;

        let fresh = content.trim().is_empty();
        let invalid = |reason: &dyn std::fmt::Display| {
            CardsError::Storage(format!(
                "{} is not a valid cards database: {}",
                path.display(),
                reason
            ))
        };
        let mut table = if fresh {
            RecordTable::new()
        } else {
            serde_json::from_str::<RecordTable>(&content).map_err(|e| invalid(&e))?
        };
        table.normalize().map_err(|e| match e {
            CardsError::Storage(reason) => invalid(&reason),
            other => other,
        })?;

        let mut store = Self { path, file, table };
        if fresh {
            store.flush()?;
        }

        info!(
            "event=store_open module=store status=ok records={} next_id={} path={}",
            store.table.len(),
            store.table.next_id(),
            store.path.display()
        );
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&mut self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.table)?;
        rewrite(&mut self.file, content.as_bytes())
            .map_err(|e| storage_error(&self.path, "write", e))?;
        debug!(
            "event=store_flush module=store status=ok records={} bytes={}",
            self.table.len(),
            content.len()
        );
        Ok(())
    }
}

fn rewrite(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.sync_data()
}

fn storage_error(path: &Path, action: &str, err: std::io::Error) -> CardsError {
    CardsError::Storage(format!("failed to {} {}: {}", action, path.display(), err))
}

impl DocumentStore for FileStore {
    fn insert(&mut self, record: Record) -> Result<DocId> {
        let id = self.table.insert(record)?;
        self.flush()?;
        Ok(id)
    }

    fn get(&self, id: DocId) -> Result<Option<Record>> {
        Ok(self.table.get(id).cloned())
    }

    fn update(&mut self, id: DocId, partial: Record) -> Result<bool> {
        if !self.table.merge(id, partial) {
            debug!("event=store_update module=store status=missing id={}", id);
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    fn delete(&mut self, id: DocId) -> Result<bool> {
        if !self.table.remove(id) {
            debug!("event=store_delete module=store status=missing id={}", id);
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    fn delete_all(&mut self) -> Result<usize> {
        let removed = self.table.clear();
        self.flush()?;
        Ok(removed)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.table.len())
    }

    fn records(&self) -> Result<Vec<(DocId, Record)>> {
        Ok(self
            .table
            .iter()
            .map(|(id, record)| (id, record.clone()))
            .collect())
    }

    fn close(self) -> Result<()> {
        self.file
            .sync_all()
            .map_err(|e| storage_error(&self.path, "sync", e))?;
        debug!(
            "event=store_close module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }
}
