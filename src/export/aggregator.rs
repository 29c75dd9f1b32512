//! Union-layout aggregation of both record sets.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{
    EntityKind, Record, StoreResult, SPINDLE_HEADERS, YEDEK_HEADERS,
};
use crate::tabular;

/// Source-kind discriminator column, first in the union layout.
pub const TABLE_FIELD: &str = "Tablo";

/// Name of the export output file, also the download file name.
pub const EXPORT_FILE_NAME: &str = "takip_export.csv";

/// The union layout: `Tablo` plus the union of both kinds' field names in
/// first-seen order.
pub fn union_headers() -> Vec<&'static str> {
    let mut headers = vec![TABLE_FIELD];
    for header in SPINDLE_HEADERS.iter().chain(YEDEK_HEADERS.iter()) {
        if !headers.contains(header) {
            headers.push(*header);
        }
    }
    headers
}

/// Encode both record sets as one combined document.
///
/// Spindle rows come first, then yedek rows; backing-file order is kept
/// within each group. Fields a kind lacks are emitted as empty strings.
pub fn aggregate(spindle_rows: &[Record], yedek_rows: &[Record]) -> String {
    let headers = union_headers();
    let mut combined = Vec::with_capacity(spindle_rows.len() + yedek_rows.len());

    for (kind, rows) in [
        (EntityKind::Spindle, spindle_rows),
        (EntityKind::Yedek, yedek_rows),
    ] {
        for row in rows {
            let mut tagged = Record::new();
            tagged.set(TABLE_FIELD, kind.label());
            for (name, value) in row.fields() {
                tagged.set(name, value);
            }
            combined.push(tagged);
        }
    }

    tabular::encode(&headers, &combined)
}

/// Aggregate and persist the export document into the data directory,
/// returning its contents.
pub fn write_export(
    data_dir: &Path,
    spindle_rows: &[Record],
    yedek_rows: &[Record],
) -> StoreResult<String> {
    let body = aggregate(spindle_rows, yedek_rows);
    let path: PathBuf = data_dir.join(EXPORT_FILE_NAME);
    fs::write(&path, &body)?;
    tracing::info!(
        spindle = spindle_rows.len(),
        yedek = yedek_rows.len(),
        "export written"
    );
    Ok(body)
}
