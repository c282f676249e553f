use anyhow::Context;
use nfcconfirm_core::config::{AppConfig, FetchConfig, PhoneNumberMode};
use nfcconfirm_core::error::ConfigError;

pub const ENV_RECORDS_URL: &str = "NFCCONFIRM_RECORDS_URL";
pub const ENV_PHONE_MODE: &str = "NFCCONFIRM_PHONE_MODE";
pub const ENV_TEST_PHONE_NUMBER: &str = "NFCCONFIRM_TEST_PHONE_NUMBER";

/// Read the app configuration from the process environment.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    app_config_from(|key| std::env::var(key).ok())
}

pub fn app_config_from<F>(lookup: F) -> anyhow::Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let endpoint = get(ENV_RECORDS_URL).ok_or(ConfigError::Missing(ENV_RECORDS_URL))?;
    let fetch = FetchConfig::parse(&endpoint).context("records endpoint")?;

    let mode = get(ENV_PHONE_MODE).unwrap_or_else(|| "entered".into());
    let phone_number = match mode.trim().to_ascii_lowercase().as_str() {
        "entered" => PhoneNumberMode::Entered,
        "device" => PhoneNumberMode::Device,
        "fixed" => {
            let number =
                get(ENV_TEST_PHONE_NUMBER).ok_or(ConfigError::Missing(ENV_TEST_PHONE_NUMBER))?;
            PhoneNumberMode::Fixed {
                number: number.trim().to_string(),
            }
        }
        other => anyhow::bail!("unknown {ENV_PHONE_MODE}: {other}"),
    };

    Ok(AppConfig {
        fetch,
        phone_number,
    })
}
