pub mod config;
pub mod records;
pub mod service;

pub use config::load_app_config;
pub use service::{AppService, LoginError, PhoneNumberSource};
