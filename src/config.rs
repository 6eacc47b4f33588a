use std::{path::Path, time::Duration};

use fractic_server_error::ServerError;

use crate::errors::{InvalidConfig, InvalidRon, ReadError};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
pub struct PayrollApiConfig {
    pub base_url: String,
    /// Sent as the Basic-auth user name.
    pub api_key: String,
    pub company_id: String,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
pub struct AccountingApiConfig {
    pub base_url: String,
    /// Sent as a bearer token.
    pub api_token: String,
}

/// Connection settings for the upstream APIs, written in RON:
///
/// ```ron
/// (
///     payroll: (base_url: "https://payroll.example.com/api", api_key: "...", company_id: "42"),
///     accounting: (base_url: "https://accounting.example.com/api", api_token: "..."),
///     request_timeout_secs: 30,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
pub struct DashboardConfig {
    pub payroll: PayrollApiConfig,
    pub accounting: AccountingApiConfig,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl DashboardConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        let config: DashboardConfig =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("DashboardConfig", &e))?;
        config.validated()
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<Path>,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron_str(&s)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validated(mut self) -> Result<Self, ServerError> {
        self.payroll.base_url = validated_base_url("payroll.base_url", &self.payroll.base_url)?;
        self.accounting.base_url =
            validated_base_url("accounting.base_url", &self.accounting.base_url)?;
        if self.payroll.company_id.trim().is_empty() {
            return Err(InvalidConfig::new("payroll.company_id must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(InvalidConfig::new("request_timeout_secs must be positive"));
        }
        Ok(self)
    }
}

fn validated_base_url(field: &str, url: &str) -> Result<String, ServerError> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) || url.contains(' ') {
        return Err(InvalidConfig::new(&format!(
            "{field} must be an http(s) URL, got '{url}'"
        )));
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        payroll: (base_url: "https://payroll.example.com/api/", api_key: "pk", company_id: "42"),
        accounting: (base_url: "https://accounting.example.com/api", api_token: "tok"),
    )"#;

    #[test]
    fn parses_and_normalizes() {
        let config = DashboardConfig::from_ron_str(SAMPLE).unwrap();
        assert_eq!(config.payroll.base_url, "https://payroll.example.com/api");
        assert_eq!(config.payroll.company_id, "42");
        assert_eq!(config.accounting.api_token, "tok");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let ron = SAMPLE.replace("https://payroll.example.com/api/", "payroll.example.com");
        assert!(DashboardConfig::from_ron_str(&ron).is_err());
    }

    #[test]
    fn rejects_empty_company_id() {
        let ron = SAMPLE.replace(r#"company_id: "42""#, r#"company_id: " ""#);
        assert!(DashboardConfig::from_ron_str(&ron).is_err());
    }

    #[test]
    fn rejects_invalid_ron() {
        assert!(DashboardConfig::from_ron_str("(payroll: ").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        assert!(DashboardConfig::from_file("/nonexistent/dashboard.ron").await.is_err());
    }
}
