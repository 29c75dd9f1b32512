//! Delimited text -> record set.

use crate::store::Record;

use super::encoder::DELIMITER;

/// Decode delimited text into records under the caller's header list.
///
/// The first row is the file's own header and is discarded; field names come
/// from `headers`, so a drifted header line does not change how data rows are
/// interpreted. Rows shorter than `headers` are padded with empty strings,
/// longer rows have their trailing values dropped. Blank rows are skipped.
/// Empty input decodes to an empty set.
///
/// The scan is quote-aware across the whole text: inside a quoted span the
/// delimiter and line breaks are literal and a doubled quote decodes to one
/// quote. CRLF row endings are accepted.
pub fn decode(text: &str, headers: &[&str]) -> Vec<Record> {
    let mut rows = split_rows(text);
    if rows.is_empty() {
        return Vec::new();
    }
    // First row is the header line.
    rows.remove(0);

    rows.into_iter()
        .map(|values| Record::from_row(headers, values))
        .collect()
}

/// Split the raw text into rows of field values, honoring quoted spans.
fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => current.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                DELIMITER => {
                    fields.push(std::mem::take(&mut current));
                }
                '\r' if chars.peek() == Some(&'\n') => {
                    // Consumed together with the following '\n'.
                }
                '\n' => {
                    fields.push(std::mem::take(&mut current));
                    push_row(&mut rows, std::mem::take(&mut fields));
                }
                _ => current.push(ch),
            }
        }
    }

    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        push_row(&mut rows, fields);
    }

    rows
}

/// Append a finished row, skipping blank lines.
fn push_row(rows: &mut Vec<Vec<String>>, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].is_empty();
    if !blank {
        rows.push(fields);
    }
}

#[cfg(test)]
mod tests {
    use super::super::encoder::encode;
    use super::*;

    const HEADERS: &[&str] = &["id", "Referans ID", "Açıklama"];

    #[test]
    fn test_empty_input_is_empty_set() {
        assert!(decode("", HEADERS).is_empty());
    }

    #[test]
    fn test_header_only_is_empty_set() {
        assert!(decode("id,Referans ID,Açıklama", HEADERS).is_empty());
        assert!(decode("id,Referans ID,Açıklama\n", HEADERS).is_empty());
    }

    #[test]
    fn test_plain_rows() {
        let records = decode("id,Referans ID,Açıklama\n1,SP-1,ok\n2,SP-2,", HEADERS);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some("1"));
        assert_eq!(records[0].get("Referans ID"), Some("SP-1"));
        assert_eq!(records[1].get("Açıklama"), Some(""));
    }

    #[test]
    fn test_header_drift_is_tolerated() {
        // The file's header names do not matter; caller schema wins.
        let records = decode("foo,bar,baz\n1,SP-1,x", HEADERS);
        assert_eq!(records[0].get("Referans ID"), Some("SP-1"));
    }

    #[test]
    fn test_short_rows_padded_with_empty() {
        let records = decode("id,Referans ID,Açıklama\n1,SP-1", HEADERS);
        assert_eq!(records[0].get("Açıklama"), Some(""));
    }

    #[test]
    fn test_quoted_delimiter_is_literal() {
        let records = decode("h,h,h\n1,\"a,b\",x", HEADERS);
        assert_eq!(records[0].get("Referans ID"), Some("a,b"));
    }

    #[test]
    fn test_doubled_quote_decodes_to_one() {
        let records = decode("h,h,h\n1,\"say \"\"hi\"\"\",x", HEADERS);
        assert_eq!(records[0].get("Referans ID"), Some("say \"hi\""));
    }

    #[test]
    fn test_quoted_newline_is_data() {
        let records = decode("h,h,h\n1,\"line1\nline2\",x\n2,SP-2,y", HEADERS);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Referans ID"), Some("line1\nline2"));
        assert_eq!(records[1].get("id"), Some("2"));
    }

    #[test]
    fn test_crlf_rows() {
        let records = decode("h,h,h\r\n1,SP-1,x\r\n2,SP-2,y", HEADERS);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("Referans ID"), Some("SP-2"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let records = decode("h,h,h\n1,SP-1,x\n\n2,SP-2,y\n", HEADERS);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_round_trip_awkward_values() {
        let record = Record::from_pairs(vec![
            ("id".into(), "1".into()),
            ("Referans ID".into(), "He said \"hi\", ok\n".into()),
            ("Açıklama".into(), "".into()),
        ]);
        let encoded = encode(HEADERS, std::slice::from_ref(&record));
        let decoded = decode(&encoded, HEADERS);
        assert_eq!(decoded, vec![record]);
    }

    #[test]
    fn test_empty_value_round_trips_as_empty() {
        let record = Record::from_row(HEADERS, vec!["1".into(), "".into(), "".into()]);
        let encoded = encode(HEADERS, std::slice::from_ref(&record));
        let decoded = decode(&encoded, HEADERS);
        assert_eq!(decoded[0].get("Referans ID"), Some(""));
        assert_eq!(decoded, vec![record]);
    }
}
