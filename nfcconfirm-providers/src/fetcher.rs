use crate::basic_auth::build_records_request;
use crate::request::HttpRequest;
use crate::runtime::HttpClient;
use nfcconfirm_core::config::FetchConfig;
use nfcconfirm_core::error::FetchError;
use nfcconfirm_core::records::RecordSet;

/// Downloads the member list with Basic credentials, retrying a bounded number of times.
#[derive(Debug, Clone)]
pub struct CredentialFetcher {
    cfg: FetchConfig,
    http: HttpClient,
}

#[derive(Debug)]
enum AttemptFailure {
    Transport(anyhow::Error),
    Status(u16),
    EmptyBody,
}

impl AttemptFailure {
    fn is_retryable(&self) -> bool {
        !matches!(self, AttemptFailure::EmptyBody)
    }
}

impl CredentialFetcher {
    pub fn new(cfg: FetchConfig) -> anyhow::Result<Self> {
        cfg.validate()?;
        let http = HttpClient::new(cfg.connect_timeout(), cfg.read_timeout())?;
        Ok(Self { cfg, http })
    }

    pub async fn fetch(&self, user_id: &str, phone_number: &str) -> Result<RecordSet, FetchError> {
        let req = build_records_request(&self.cfg.endpoint, user_id, phone_number);
        let attempts = self.cfg.max_attempts;

        for attempt in 1..=attempts {
            match self.attempt(&req).await {
                Ok(records) => {
                    log::info!(
                        "fetched {} records on attempt {attempt}/{attempts}",
                        records.len()
                    );
                    return Ok(records);
                }
                Err(failure) if !failure.is_retryable() => {
                    log::warn!("records endpoint returned no usable rows");
                    return Err(FetchError::EmptyRecordSet);
                }
                Err(AttemptFailure::Status(status)) => {
                    log::warn!("fetch attempt {attempt}/{attempts} failed: status={status}");
                }
                Err(failure) => {
                    log::warn!("fetch attempt {attempt}/{attempts} failed: {failure:?}");
                }
            }

            if attempt < attempts {
                tokio::time::sleep(self.cfg.retry_delay()).await;
            }
        }

        log::error!("records fetch exhausted after {attempts} attempts");
        Err(FetchError::Exhausted { attempts })
    }

    async fn attempt(&self, req: &HttpRequest) -> Result<RecordSet, AttemptFailure> {
        let resp = self
            .http
            .execute(req)
            .await
            .map_err(AttemptFailure::Transport)?;

        if !resp.is_success() {
            return Err(AttemptFailure::Status(resp.status));
        }

        let body = String::from_utf8_lossy(&resp.body);
        RecordSet::parse_body(&body).ok_or(AttemptFailure::EmptyBody)
    }
}
