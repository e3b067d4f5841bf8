use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::core::ScradaError;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.scrada.be";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and endpoint of one Scrada company.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    api_secret: String,
    company_id: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Credentials are trimmed and must not be empty.
    pub fn new(api_key: &str, api_secret: &str, company_id: &str) -> Result<Self, ScradaError> {
        Ok(Self {
            api_key: non_empty(api_key, "API key")?,
            api_secret: non_empty(api_secret, "API secret")?,
            company_id: non_empty(company_id, "Company ID")?,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Point the client at another host, e.g. the test environment.
    ///
    /// The URL must use `http://` or `https://`; trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ScradaError> {
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(ScradaError::Config(
                "Base URL must start with https:// or http://".into(),
            ));
        }
        let trimmed = base_url.trim_end_matches('/');
        if trimmed == "https:" || trimmed == "http:" {
            return Err(ScradaError::Config(
                "Base URL cannot be empty after trimming".into(),
            ));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `SCRADA_API_KEY`, `SCRADA_API_SECRET`, `SCRADA_COMPANY_ID` and
    /// the optional `SCRADA_BASE_URL`.
    pub fn from_env() -> Result<Self, ScradaError> {
        Self::from_environment(config::Environment::with_prefix("SCRADA"))
    }

    fn from_environment(source: config::Environment) -> Result<Self, ScradaError> {
        let settings: EnvSettings = config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ScradaError::Config(e.to_string()))?;

        let client = Self::new(
            &settings.api_key,
            &settings.api_secret,
            &settings.company_id,
        )?;
        match settings.base_url {
            Some(url) => client.with_base_url(&url),
            None => Ok(client),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// `SCRADA_*` variables, lowercased without the prefix.
#[derive(Deserialize)]
struct EnvSettings {
    api_key: String,
    api_secret: String,
    company_id: String,
    base_url: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .field("company_id", &self.company_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty(value: &str, label: &str) -> Result<String, ScradaError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScradaError::Config(format!("{label} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new(" key ", "secret", "company").unwrap()
    }

    #[test]
    fn credentials_are_trimmed() {
        assert_eq!(config().api_key(), "key");
        assert_eq!(config().base_url(), DEFAULT_BASE_URL);
        assert_eq!(config().timeout(), Duration::from_secs(30));
    }

    #[test]
    fn blank_credentials_rejected() {
        let err = ClientConfig::new("key", "   ", "company").unwrap_err();
        assert_eq!(err.to_string(), "configuration error: API secret cannot be empty");
    }

    #[test]
    fn base_url_guards() {
        let c = config().with_base_url("https://apitest.scrada.be//").unwrap();
        assert_eq!(c.base_url(), "https://apitest.scrada.be");

        assert!(config().with_base_url("ftp://example.com").is_err());
        assert!(config().with_base_url("https://").is_err());

        let err = config().with_base_url("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: Base URL must start with https:// or http://"
        );
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("SCRADA").source(Some(map))
    }

    #[test]
    fn environment_settings() {
        let c = ClientConfig::from_environment(env(&[
            ("SCRADA_API_KEY", "key"),
            ("SCRADA_API_SECRET", "secret"),
            ("SCRADA_COMPANY_ID", "company"),
            ("SCRADA_BASE_URL", "https://apitest.scrada.be/"),
        ]))
        .unwrap();
        assert_eq!(c.company_id(), "company");
        assert_eq!(c.base_url(), "https://apitest.scrada.be");

        let c = ClientConfig::from_environment(env(&[
            ("SCRADA_API_KEY", "key"),
            ("SCRADA_API_SECRET", "secret"),
            ("SCRADA_COMPANY_ID", "company"),
        ]))
        .unwrap();
        assert_eq!(c.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_guards() {
        let missing = ClientConfig::from_environment(env(&[("SCRADA_API_KEY", "key")]));
        assert!(matches!(missing, Err(ScradaError::Config(_))));

        let empty_url = ClientConfig::from_environment(env(&[
            ("SCRADA_API_KEY", "key"),
            ("SCRADA_API_SECRET", "secret"),
            ("SCRADA_COMPANY_ID", "company"),
            ("SCRADA_BASE_URL", ""),
        ]));
        assert!(empty_url.is_err());
    }

    #[test]
    fn debug_hides_secrets() {
        let c = ClientConfig::new("k3y-value", "s3cret-value", "company").unwrap();
        let out = format!("{c:?}");
        assert!(!out.contains("k3y-value"));
        assert!(!out.contains("s3cret-value"));
        assert!(out.contains("company"));
    }
}
