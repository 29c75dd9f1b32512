//! Export subsystem for takip
//!
//! Merges both entity kinds into one combined tabular document under a
//! union field layout, tagged by a `Tablo` source-kind column, for
//! download and backup.

mod aggregator;

pub use aggregator::{aggregate, union_headers, write_export, EXPORT_FILE_NAME, TABLE_FIELD};
