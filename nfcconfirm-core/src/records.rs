use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// One non-blank line of the member list, split on commas with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CsvRecord {
    columns: Vec<String>,
}

impl CsvRecord {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parse_line(line: &str) -> Self {
        Self::new(line.split(',').map(str::trim))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// True when any field equals `serial`, ignoring ASCII case. No substring matching.
    pub fn contains_serial(&self, serial: &str) -> bool {
        self.columns.iter().any(|c| c.eq_ignore_ascii_case(serial))
    }

    pub fn display_joined(&self) -> String {
        self.columns.join(" / ")
    }
}

/// The full member list fetched for one session.
///
/// Never empty: the only constructor refuses an empty sequence, so a successful fetch
/// cannot hand out a record set with nothing in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<CsvRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<CsvRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { records })
        }
    }

    /// Parse a response body: one record per non-blank line.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Returns `None` when the body holds no usable line (empty, or whitespace only).
    pub fn parse_body(body: &str) -> Option<Self> {
        let records = body
            .split(['\r', '\n'])
            .filter(|line| !line.trim().is_empty())
            .map(CsvRecord::parse_line)
            .collect();
        Self::new(records)
    }

    pub fn records(&self) -> &[CsvRecord] {
        &self.records
    }
}

impl Deref for RecordSet {
    type Target = [CsvRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_trims_fields() {
        let r = CsvRecord::parse_line(" u1 ,0900000001,  AABBCCDD ");
        assert_eq!(r.columns(), ["u1", "0900000001", "AABBCCDD"]);
    }

    #[test]
    fn parse_line_keeps_empty_fields() {
        let r = CsvRecord::parse_line("a,,b,");
        assert_eq!(r.columns(), ["a", "", "b", ""]);
    }

    #[test]
    fn parse_body_skips_blank_lines() {
        let set = RecordSet::parse_body("\n  \nu1,0900000001,AABBCCDD\r\n\t\nu2,0900000002,11223344\n")
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].columns(), ["u1", "0900000001", "AABBCCDD"]);
        assert_eq!(set[1].columns(), ["u2", "0900000002", "11223344"]);
    }

    #[test]
    fn parse_body_splits_on_bare_carriage_returns() {
        let set = RecordSet::parse_body("u1,p,AABBCCDD\ru2,q,11223344\r").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].columns(), ["u1", "p", "AABBCCDD"]);
        assert_eq!(set[1].columns(), ["u2", "q", "11223344"]);
    }

    #[test]
    fn parse_body_rejects_all_blank() {
        assert_eq!(RecordSet::parse_body(""), None);
        assert_eq!(RecordSet::parse_body("\n\n   \r\n\t"), None);
    }

    #[test]
    fn new_refuses_empty() {
        assert!(RecordSet::new(vec![]).is_none());
        assert!(RecordSet::new(vec![CsvRecord::new(["x"])]).is_some());
    }

    #[test]
    fn contains_serial_is_exact_but_case_insensitive() {
        let r = CsvRecord::new(["u1", "aabbccdd"]);
        assert!(r.contains_serial("AABBCCDD"));
        assert!(!r.contains_serial("AABBCC"));
        assert!(!r.contains_serial("AABBCCDDEE"));
    }

    #[test]
    fn display_joins_with_slashes() {
        let r = CsvRecord::new(["u1", "0900000001", "AABBCCDD"]);
        assert_eq!(r.display_joined(), "u1 / 0900000001 / AABBCCDD");
    }
}
