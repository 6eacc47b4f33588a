use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use reqwest::Client;
use serde_json::Value;

use crate::{config::PayrollApiConfig, entities::PayrollPeriod};

use super::http_utils::{build_client, fetch_json};

pub(crate) const PAYROLL_API: &str = "payroll";

#[async_trait]
pub(crate) trait PayrollApiDatasource: Send + Sync {
    /// Raw `{"rawData": ...}` payload for one company and month.
    async fn accounting_operations(&self, period: PayrollPeriod) -> Result<Value, ServerError>;
}

pub(crate) struct PayrollApiDatasourceImpl {
    client: Client,
    config: PayrollApiConfig,
}

impl PayrollApiDatasourceImpl {
    pub(crate) fn new(config: PayrollApiConfig, timeout: Duration) -> Result<Self, ServerError> {
        Ok(Self {
            client: build_client(PAYROLL_API, timeout)?,
            config,
        })
    }

    fn operations_url(&self) -> String {
        format!(
            "{}/companies/{}/accounting-operations",
            self.config.base_url, self.config.company_id
        )
    }
}

#[async_trait]
impl PayrollApiDatasource for PayrollApiDatasourceImpl {
    async fn accounting_operations(&self, period: PayrollPeriod) -> Result<Value, ServerError> {
        tracing::debug!(company_id = %self.config.company_id, %period, "fetching accounting operations");
        let request = self
            .client
            .get(self.operations_url())
            .basic_auth(&self.config.api_key, None::<&str>)
            .query(&[("period", period.to_string())]);
        fetch_json(PAYROLL_API, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_url_includes_company() {
        let datasource = PayrollApiDatasourceImpl::new(
            PayrollApiConfig {
                base_url: "https://payroll.example.com/api".into(),
                api_key: "pk".into(),
                company_id: "42".into(),
            },
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            datasource.operations_url(),
            "https://payroll.example.com/api/companies/42/accounting-operations"
        );
    }
}
