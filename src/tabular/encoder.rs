//! Record set -> delimited text.

use crate::store::Record;

/// Field delimiter of the backing-file format.
pub const DELIMITER: char = ',';

/// Escape a single value for one cell of output.
///
/// Values containing the delimiter, a double quote or a line break are
/// wrapped in double quotes with internal quotes doubled; everything else is
/// emitted verbatim.
pub fn escape_value(value: &str) -> String {
    if value.contains(DELIMITER) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Encode a record set under the given header order.
///
/// Produces the header line followed by one line per record, values in
/// header order. Fields a record does not carry encode as empty string.
pub fn encode(headers: &[&str], rows: &[Record]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header_line = headers
        .iter()
        .map(|h| escape_value(h))
        .collect::<Vec<_>>()
        .join(",");
    lines.push(header_line);

    for row in rows {
        let line = headers
            .iter()
            .map(|h| escape_value(row.get(h).unwrap_or("")))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}
