// User-facing texts shown by the presentation layer.

use crate::matcher::MatchOutcome;

pub const NFC_INSTRUCTION: &str = "Tap a card.";
pub const SERIAL_DEFAULT: &str = "------";
pub const LOGIN_IN_PROGRESS: &str = "Logging in...";
pub const LOGIN_SUCCESS_NFC_PROMPT: &str = "Login succeeded. Tap a card.";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const RECORDS_EMPTY: &str = "The member list is empty.";
pub const TAG_NOT_RECOGNIZED: &str = "The NFC tag could not be recognized.";
pub const SERIAL_NOT_AVAILABLE: &str = "The serial number could not be read.";
pub const NOT_REGISTERED: &str = "Not registered.";
pub const USER_ID_REQUIRED: &str = "Enter a user ID.";
pub const PHONE_NUMBER_UNAVAILABLE: &str =
    "Could not read the phone number. Check permissions and SIM state.";

pub fn match_success(columns_joined: &str) -> String {
    format!("Match: {columns_joined}")
}

pub fn outcome_message(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::Matched(record) => match_success(&record.display_joined()),
        MatchOutcome::NotMatched => NOT_REGISTERED.into(),
        MatchOutcome::TokenUnreadable => TAG_NOT_RECOGNIZED.into(),
        MatchOutcome::SerialEmpty => SERIAL_NOT_AVAILABLE.into(),
    }
}
