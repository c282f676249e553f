use crate::records::CsvRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Matched(CsvRecord),
    NotMatched,
    /// The reader reported a detection but handed over no token.
    TokenUnreadable,
    SerialEmpty,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}

/// Uppercase hex, two digits per byte, no separators.
pub fn serial_hex(id: &[u8]) -> String {
    let mut out = String::with_capacity(id.len() * 2);
    for b in id {
        // Writing to a String cannot fail.
        let _ = write!(out, "{b:02X}");
    }
    out
}

/// Correlate a raw token id with the held records.
///
/// The first record (in list order) with a field equal to the hex serial wins.
pub fn match_token(id: &[u8], records: &[CsvRecord]) -> MatchOutcome {
    let serial = serial_hex(id);
    match_serial(&serial, records)
}

pub fn match_serial(serial: &str, records: &[CsvRecord]) -> MatchOutcome {
    if serial.is_empty() {
        return MatchOutcome::SerialEmpty;
    }

    records
        .iter()
        .find(|r| r.contains_serial(serial))
        .cloned()
        .map(MatchOutcome::Matched)
        .unwrap_or(MatchOutcome::NotMatched)
}
