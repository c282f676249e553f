use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nfcconfirm_engine::traits::LocalIdentityProvider;

/// Always reports the same line number.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    number: String,
    reads: Arc<AtomicUsize>,
}

impl StaticIdentityProvider {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn boxed(self) -> Arc<dyn LocalIdentityProvider> {
        Arc::new(self)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LocalIdentityProvider for StaticIdentityProvider {
    async fn local_phone_number(&self) -> anyhow::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.number.clone())
    }
}

/// A device with no readable line: no SIM, or the permission was denied.
#[derive(Debug, Default)]
pub struct UnavailableIdentityProvider;

impl UnavailableIdentityProvider {
    pub fn boxed(self) -> Arc<dyn LocalIdentityProvider> {
        Arc::new(self)
    }
}

#[async_trait::async_trait]
impl LocalIdentityProvider for UnavailableIdentityProvider {
    async fn local_phone_number(&self) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("phone number unavailable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_counts_reads() {
        let p = StaticIdentityProvider::new("0900000001");
        let shared = p.clone().boxed();
        assert_eq!(shared.local_phone_number().await.unwrap(), "0900000001");
        assert_eq!(p.reads(), 1);
    }

    #[tokio::test]
    async fn unavailable_provider_errors() {
        assert!(UnavailableIdentityProvider.local_phone_number().await.is_err());
    }
}
