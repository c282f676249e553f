use std::sync::Arc;

use nfcconfirm_core::config::{AppConfig, PhoneNumberMode};
use nfcconfirm_core::matcher::MatchOutcome;
use nfcconfirm_core::messages::{PHONE_NUMBER_UNAVAILABLE, USER_ID_REQUIRED};
use nfcconfirm_engine::engine::{LoginTask, SessionController};
use nfcconfirm_engine::session::SessionStatus;
use nfcconfirm_engine::traits::{LocalIdentityProvider, RecordSource};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::records::HttpRecordSource;

/// Where `login` takes the phone number from. One deployment uses exactly one.
#[derive(Clone)]
pub enum PhoneNumberSource {
    Entered,
    Device(Arc<dyn LocalIdentityProvider>),
    Fixed(String),
}

impl std::fmt::Debug for PhoneNumberSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhoneNumberSource::Entered => f.write_str("Entered"),
            PhoneNumberSource::Device(_) => f.write_str("Device"),
            PhoneNumberSource::Fixed(_) => f.write_str("Fixed([REDACTED])"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("{}", USER_ID_REQUIRED)]
    MissingUserId,

    #[error("{}", PHONE_NUMBER_UNAVAILABLE)]
    PhoneNumberUnavailable,
}

/// The entry point a presentation layer drives: login, token events, logout.
#[derive(Clone)]
pub struct AppService {
    session: SessionController,
    phone: PhoneNumberSource,
}

impl AppService {
    pub fn new(source: Arc<dyn RecordSource>, phone: PhoneNumberSource) -> Self {
        Self {
            session: SessionController::new(source),
            phone,
        }
    }

    /// Build the service against the configured HTTPS endpoint.
    ///
    /// `identity` is only consulted in device mode, where it is required.
    pub fn from_config(
        cfg: &AppConfig,
        identity: Option<Arc<dyn LocalIdentityProvider>>,
    ) -> anyhow::Result<Self> {
        let source = Arc::new(HttpRecordSource::new(cfg.fetch.clone())?);

        let phone = match &cfg.phone_number {
            PhoneNumberMode::Entered => PhoneNumberSource::Entered,
            PhoneNumberMode::Device => PhoneNumberSource::Device(identity.ok_or_else(|| {
                anyhow::anyhow!("device phone number mode needs an identity provider")
            })?),
            PhoneNumberMode::Fixed { number } => PhoneNumberSource::Fixed(number.clone()),
        };

        log::info!(
            "records endpoint={} phone_number={:?}",
            cfg.fetch.endpoint,
            phone
        );
        Ok(Self::new(source, phone))
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    /// Start a login.
    ///
    /// `entered_phone` is what the user typed; it is ignored unless the phone number source
    /// is [`PhoneNumberSource::Entered`].
    pub async fn login(&self, user_id: &str, entered_phone: &str) -> Result<LoginTask, LoginError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(LoginError::MissingUserId);
        }

        let phone_number = match &self.phone {
            PhoneNumberSource::Entered => entered_phone.trim().to_string(),
            PhoneNumberSource::Fixed(number) => number.clone(),
            PhoneNumberSource::Device(provider) => match provider.local_phone_number().await {
                Ok(n) if !n.trim().is_empty() => n.trim().to_string(),
                Ok(_) => {
                    self.session.reject_login(PHONE_NUMBER_UNAVAILABLE).await;
                    return Err(LoginError::PhoneNumberUnavailable);
                }
                Err(e) => {
                    log::warn!("read local phone number failed: {e:#}");
                    self.session.reject_login(PHONE_NUMBER_UNAVAILABLE).await;
                    return Err(LoginError::PhoneNumberUnavailable);
                }
            },
        };

        Ok(self.session.login(user_id, &phone_number).await)
    }

    pub async fn on_token_detected(&self, id: Option<&[u8]>) -> MatchOutcome {
        self.session.on_token_detected(id).await
    }

    pub async fn acknowledge_not_found(&self) {
        self.session.acknowledge_not_found().await
    }

    pub async fn logout(&self) {
        self.session.logout().await
    }

    pub async fn status(&self) -> SessionStatus {
        self.session.status().await
    }

    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionStatus> {
        self.session.subscribe().await
    }
}
