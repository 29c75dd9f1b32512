//! Tabular text subsystem for takip
//!
//! Pure conversion between record sets and the delimited-text format used by
//! the backing files. No I/O happens here; the store owns the files.
//!
//! # Format
//!
//! - Comma-delimited, one header line followed by one line per record
//! - Values containing the delimiter, a double quote or a line break are
//!   wrapped in double quotes, internal quotes doubled
//! - Field names come from the caller's schema on decode; the header line in
//!   the file is skipped, so header drift is tolerated
//! - A line break inside a quoted value is data, not a row boundary

mod decoder;
mod encoder;

pub use decoder::decode;
pub use encoder::{encode, escape_value, DELIMITER};
