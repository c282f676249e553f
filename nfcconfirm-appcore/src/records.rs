use async_trait::async_trait;
use nfcconfirm_core::config::FetchConfig;
use nfcconfirm_core::error::FetchError;
use nfcconfirm_core::records::RecordSet;
use nfcconfirm_engine::traits::RecordSource;
use nfcconfirm_providers::CredentialFetcher;

/// The HTTPS member list as a session record source.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    fetcher: CredentialFetcher,
}

impl HttpRecordSource {
    pub fn new(cfg: FetchConfig) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher: CredentialFetcher::new(cfg)?,
        })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self, user_id: &str, phone_number: &str) -> Result<RecordSet, FetchError> {
        self.fetcher.fetch(user_id, phone_number).await
    }
}
