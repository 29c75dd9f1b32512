//! Record store subsystem for takip
//!
//! One store per entity kind, CRUD over that kind's backing file. The file
//! is the sole source of truth: every operation loads the full set, mutates
//! it in memory and rewrites the file, releasing the handle before
//! returning.
//!
//! # Invariants Enforced
//!
//! - `id` is store-assigned, unique per kind, max numeric id + 1
//! - `Referans ID` is required non-empty on create
//! - `Son Güncelleme` is stamped on every create and update
//! - Header order is fixed per kind and preserved on every write
//! - Rewrites go through a temp file + rename, so a crash mid-write never
//!   truncates the backing file

mod errors;
mod record;
mod schema;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::Record;
pub use schema::{
    EntityKind, ID_FIELD, REFERENCE_FIELD, SPINDLE_HEADERS, UPDATED_FIELD, YEDEK_HEADERS,
};
pub use store::{FieldPatch, RecordStore};
