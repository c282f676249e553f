use async_trait::async_trait;
use nfcconfirm_core::error::FetchError;
use nfcconfirm_core::records::RecordSet;

/// Produces the authoritative member list for one login.
///
/// Retries, if any, happen behind this boundary; the session never retries a failed fetch.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, user_id: &str, phone_number: &str) -> Result<RecordSet, FetchError>;
}

/// Reads the device's own phone number.
#[async_trait]
pub trait LocalIdentityProvider: Send + Sync {
    async fn local_phone_number(&self) -> anyhow::Result<String>;
}
