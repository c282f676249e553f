use nfcconfirm_core::records::RecordSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    // Shared so observers can hold a snapshot while the session swaps in a newer set.
    Success(Arc<RecordSet>),
    Error(String),
}

impl SessionState {
    pub fn stage(&self) -> SessionStage {
        match self {
            SessionState::Idle => SessionStage::Idle,
            SessionState::Loading => SessionStage::Loading,
            SessionState::Success(_) => SessionStage::Success,
            SessionState::Error(_) => SessionStage::Error,
        }
    }

    pub fn records(&self) -> Option<&Arc<RecordSet>> {
        match self {
            SessionState::Success(records) => Some(records),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SessionState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStage {
    Idle,
    Loading,
    Success,
    Error,
}

impl SessionStage {
    // A stable string label for UI display; not derived from `Debug`.
    pub fn label(self) -> &'static str {
        match self {
            SessionStage::Idle => "idle",
            SessionStage::Loading => "loading",
            SessionStage::Success => "success",
            SessionStage::Error => "error",
        }
    }
}

/// Everything an observer needs to render the session, captured atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub state: SessionState,
    pub stage_label: String,
    pub message: String,
    pub serial_text: String,
    pub progress: Option<String>,
    pub not_found_alert: Option<String>,
}

impl SessionStatus {
    pub fn stage(&self) -> SessionStage {
        self.state.stage()
    }
}
