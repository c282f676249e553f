pub mod basic_auth;
pub mod fetcher;
pub mod request;
pub mod runtime;

pub use fetcher::CredentialFetcher;
