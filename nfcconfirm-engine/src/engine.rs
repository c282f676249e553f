use crate::progress::ProgressSignal;
use crate::session::{SessionState, SessionStatus};
use crate::traits::RecordSource;
use nfcconfirm_core::error::FetchError;
use nfcconfirm_core::matcher::{MatchOutcome, match_serial, serial_hex};
use nfcconfirm_core::messages::{
    LOGIN_IN_PROGRESS, LOGIN_SUCCESS_NFC_PROMPT, NFC_INSTRUCTION, SERIAL_DEFAULT, outcome_message,
};
use nfcconfirm_core::records::{CsvRecord, RecordSet};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::{AbortHandle, JoinHandle};

struct Inner {
    state: SessionState,
    message: String,
    serial_text: String,
    progress: ProgressSignal,
    not_found_alert: Option<String>,

    // Bumped by every login/logout so a superseded fetch can't publish its result.
    generation: u64,
    fetch_task: Option<AbortHandle>,

    subscribers: Vec<mpsc::UnboundedSender<SessionStatus>>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            message: NFC_INSTRUCTION.into(),
            serial_text: SERIAL_DEFAULT.into(),
            progress: ProgressSignal::new(),
            not_found_alert: None,
            generation: 0,
            fetch_task: None,
            subscribers: Vec::new(),
        }
    }
}

impl Inner {
    fn snapshot(&self) -> SessionStatus {
        SessionStatus {
            state: self.state.clone(),
            stage_label: self.state.stage().label().into(),
            message: self.message.clone(),
            serial_text: self.serial_text.clone(),
            progress: self.progress.current().map(str::to_string),
            not_found_alert: self.not_found_alert.clone(),
        }
    }

    fn set_state(&mut self, state: SessionState) {
        let prev = self.state.stage();
        let next = state.stage();
        if prev != next {
            log::info!("session stage: {:?} -> {:?}", prev, next);
        }
        self.state = state;
    }

    // Called with the lock held, so observers see mutations in the order they happened.
    fn publish(&mut self) {
        let status = self.snapshot();
        self.subscribers.retain(|tx| tx.send(status.clone()).is_ok());
    }

    fn invalidate_fetch(&mut self) -> u64 {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

/// Owns the login lifecycle and the record set, and answers token detections.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Mutex<Inner>>,
    source: Arc<dyn RecordSource>,
}

/// Handle to a login started by [`SessionController::login`].
pub struct LoginTask {
    handle: JoinHandle<Option<SessionState>>,
}

impl LoginTask {
    /// The state the login settled in, or `None` if a later login or a logout replaced it.
    pub async fn finished(self) -> Option<SessionState> {
        self.handle.await.ok().flatten()
    }
}

impl SessionController {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            source,
        }
    }

    pub async fn status(&self) -> SessionStatus {
        self.inner.lock().await.snapshot()
    }

    pub async fn state(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// Register an observer. It receives the current status first, then one status per change.
    ///
    /// Changes are never coalesced, so the receiver must be drained; an undrained one queues
    /// every status until it is dropped.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionStatus> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock().await;
        // The receiver is alive here, so this send can't fail.
        let _ = tx.send(inner.snapshot());
        inner.subscribers.push(tx);
        rx
    }

    /// Enter `Loading` and fetch in the background.
    ///
    /// Calling this while a fetch is outstanding restarts it: the old fetch is aborted and its
    /// result, should it still arrive, is dropped.
    pub async fn login(&self, user_id: &str, phone_number: &str) -> LoginTask {
        let user_id = user_id.to_string();
        let phone_number = phone_number.to_string();

        let mut inner = self.inner.lock().await;
        let generation = inner.invalidate_fetch();

        inner.set_state(SessionState::Loading);
        inner.progress.begin(LOGIN_IN_PROGRESS);
        inner.publish();

        let controller = self.clone();
        let source = self.source.clone();
        let handle = tokio::spawn(async move {
            let res = source.fetch(&user_id, &phone_number).await;
            controller.finish_login(generation, res).await
        });
        inner.fetch_task = Some(handle.abort_handle());

        LoginTask { handle }
    }

    /// Fail a login before any fetch starts (e.g. no phone number available).
    pub async fn reject_login(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("login rejected: {message}");

        let mut inner = self.inner.lock().await;
        inner.invalidate_fetch();
        inner.set_state(SessionState::Error(message));
        inner.progress.end();
        inner.publish();
    }

    async fn finish_login(
        &self,
        generation: u64,
        res: Result<RecordSet, FetchError>,
    ) -> Option<SessionState> {
        let mut inner = self.inner.lock().await;

        // Ignore late results from a replaced or cancelled login.
        if inner.generation != generation {
            return None;
        }
        inner.fetch_task = None;

        match res {
            Ok(records) => {
                log::info!("login succeeded with {} records", records.len());
                inner.set_state(SessionState::Success(Arc::new(records)));
                inner.message = LOGIN_SUCCESS_NFC_PROMPT.into();
            }
            Err(e) => {
                log::error!("login failed: {e:?}");
                inner.set_state(SessionState::Error(e.to_string()));
            }
        }
        inner.progress.end();
        inner.publish();

        Some(inner.state.clone())
    }

    /// Handle one detection event from the token reader.
    ///
    /// `None` means the reader saw something but could not hand over a token. Outside
    /// `Success` there are no records, so any readable token comes back `NotMatched`.
    pub async fn on_token_detected(&self, id: Option<&[u8]>) -> MatchOutcome {
        let mut inner = self.inner.lock().await;

        let outcome = match id {
            None => {
                log::warn!("token detected but no id was delivered");
                MatchOutcome::TokenUnreadable
            }
            Some(id) => {
                let serial = serial_hex(id);
                if serial.is_empty() {
                    MatchOutcome::SerialEmpty
                } else {
                    log::info!("token serial={serial}");
                    inner.serial_text = serial.clone();

                    let records: &[CsvRecord] = match inner.state.records() {
                        Some(records) => records.records(),
                        None => &[],
                    };
                    match_serial(&serial, records)
                }
            }
        };

        log::info!("token outcome: matched={}", outcome.is_match());
        inner.message = outcome_message(&outcome);
        if outcome == MatchOutcome::NotMatched {
            inner.not_found_alert = Some(inner.message.clone());
        }
        inner.publish();

        outcome
    }

    /// Dismiss the not-found notice once the presentation layer has shown it.
    pub async fn acknowledge_not_found(&self) {
        let mut inner = self.inner.lock().await;
        if inner.not_found_alert.take().is_some() {
            inner.publish();
        }
    }

    pub async fn logout(&self) {
        let mut inner = self.inner.lock().await;
        inner.invalidate_fetch();

        inner.set_state(SessionState::Idle);
        inner.message = NFC_INSTRUCTION.into();
        inner.serial_text = SERIAL_DEFAULT.into();
        inner.not_found_alert = None;
        inner.progress.end();
        inner.publish();
    }
}
