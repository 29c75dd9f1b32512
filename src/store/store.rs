//! CRUD over one entity kind's backing file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::tabular;

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use super::schema::{EntityKind, ID_FIELD, REFERENCE_FIELD, UPDATED_FIELD};

/// Partial field mapping supplied by a caller on create or update.
///
/// Keys are canonical field names; anything not in the kind's layout is
/// ignored, and `id` / `Son Güncelleme` can never be set through a patch.
pub type FieldPatch = Vec<(String, String)>;

/// Record store for one entity kind.
///
/// Holds only the backing-file path; the file is opened, fully read or
/// rewritten and released inside each operation. Callers that may run
/// concurrently must serialize the whole read-mutate-write sequence per
/// store (the HTTP layer wraps each store in a mutex).
#[derive(Debug)]
pub struct RecordStore {
    kind: EntityKind,
    path: PathBuf,
}

impl RecordStore {
    /// Open the store for `kind`, seeding a header-only backing file if none
    /// exists yet.
    pub fn open(data_dir: &Path, kind: EntityKind) -> StoreResult<Self> {
        let store = Self {
            kind,
            path: data_dir.join(kind.file_name()),
        };
        store.ensure_file()?;
        Ok(store)
    }

    /// The entity kind this store serves.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in backing-file order. A missing file is an empty set.
    pub fn list_all(&self) -> StoreResult<Vec<Record>> {
        self.load()
    }

    /// Records whose `Referans ID` contains `term` case-insensitively.
    ///
    /// An empty or absent term returns the full set unchanged in order.
    pub fn filter_by_reference(&self, term: Option<&str>) -> StoreResult<Vec<Record>> {
        let rows = self.load()?;
        let term = match term {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return Ok(rows),
        };
        Ok(rows
            .into_iter()
            .filter(|row| {
                row.get(REFERENCE_FIELD)
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&term)
            })
            .collect())
    }

    /// Create a record from a partial field mapping.
    ///
    /// Assigns the next identifier, fills unspecified fields with empty
    /// strings, stamps `Son Güncelleme` and persists the full set.
    pub fn insert(&self, patch: &FieldPatch) -> StoreResult<Record> {
        let has_reference = patch
            .iter()
            .any(|(name, value)| name == REFERENCE_FIELD && !value.is_empty());
        if !has_reference {
            return Err(StoreError::MissingReference);
        }

        let mut rows = self.load()?;
        let id = next_id(&rows);

        let mut record = Record::new();
        for header in self.kind.headers() {
            let value = if *header == ID_FIELD {
                id.clone()
            } else if *header == UPDATED_FIELD {
                timestamp()
            } else {
                patch
                    .iter()
                    .find(|(name, _)| name == header)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_default()
            };
            record.set(header, value);
        }

        rows.push(record.clone());
        self.persist(&rows)?;
        tracing::info!(kind = self.kind.label(), id = %id, "record created");
        Ok(record)
    }

    /// Merge a partial field mapping over the record with `id`.
    ///
    /// The identifier is immutable, fields absent from the patch keep their
    /// current value and `Son Güncelleme` is always refreshed.
    pub fn update(&self, id: &str, patch: &FieldPatch) -> StoreResult<Record> {
        let mut rows = self.load()?;
        let index = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let record = &mut rows[index];
        for (name, value) in patch {
            if name == ID_FIELD || name == UPDATED_FIELD {
                continue;
            }
            if self.kind.headers().contains(&name.as_str()) {
                record.set(name, value.clone());
            }
        }
        record.set(UPDATED_FIELD, timestamp());
        let updated = record.clone();

        self.persist(&rows)?;
        tracing::info!(kind = self.kind.label(), id = %id, "record updated");
        Ok(updated)
    }

    /// Remove the record with `id` and persist the remainder.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut rows = self.load()?;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }

        self.persist(&rows)?;
        tracing::info!(kind = self.kind.label(), id = %id, "record deleted");
        Ok(())
    }

    /// Seed a header-only backing file if none exists.
    fn ensure_file(&self) -> StoreResult<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            self.persist(&[])?;
        }
        Ok(())
    }

    /// Decode the full backing file; a missing file is an empty set.
    fn load(&self) -> StoreResult<Vec<Record>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(tabular::decode(&text, self.kind.headers())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// Rewrite the full backing file atomically (temp file + rename).
    fn persist(&self, rows: &[Record]) -> StoreResult<()> {
        let body = tabular::encode(self.kind.headers(), rows);
        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Next identifier: max numeric id + 1, non-numeric ids counting as 0.
fn next_id(rows: &[Record]) -> String {
    let max = rows
        .iter()
        .map(|row| row.id().parse::<u64>().unwrap_or(0))
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// `Son Güncelleme` stamp, local time in the Turkish day-first format.
fn timestamp() -> String {
    Local::now().format("%d.%m.%Y %H:%M:%S").to_string()
}
