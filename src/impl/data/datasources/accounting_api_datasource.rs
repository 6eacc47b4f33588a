use std::time::Duration;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use reqwest::Client;

use crate::{
    config::AccountingApiConfig,
    data::models::dashboard_models::{
        BreakdownLineModel, FiscalYearModel, MonthlyKpisModel, TreasuryModel,
    },
    entities::KpiMonth,
};

use super::http_utils::{build_client, fetch_json};

pub(crate) const ACCOUNTING_API: &str = "accounting";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BreakdownKind {
    Charges,
    Revenues,
}

impl BreakdownKind {
    fn path(&self) -> &'static str {
        match self {
            BreakdownKind::Charges => "breakdowns/charges",
            BreakdownKind::Revenues => "breakdowns/revenues",
        }
    }
}

#[async_trait]
pub(crate) trait AccountingApiDatasource: Send + Sync {
    async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpisModel, ServerError>;
    async fn fiscal_years(&self) -> Result<Vec<FiscalYearModel>, ServerError>;
    async fn current_treasury(&self) -> Result<TreasuryModel, ServerError>;
    async fn breakdown(
        &self,
        kind: BreakdownKind,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLineModel>, ServerError>;
}

pub(crate) struct AccountingApiDatasourceImpl {
    client: Client,
    config: AccountingApiConfig,
}

impl AccountingApiDatasourceImpl {
    pub(crate) fn new(config: AccountingApiConfig, timeout: Duration) -> Result<Self, ServerError> {
        Ok(Self {
            client: build_client(ACCOUNTING_API, timeout)?,
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(path, "fetching from accounting API");
        self.client
            .get(self.url(path))
            .bearer_auth(&self.config.api_token)
    }
}

#[async_trait]
impl AccountingApiDatasource for AccountingApiDatasourceImpl {
    async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpisModel, ServerError> {
        let request = self.get("kpis").query(&[("month", month.to_string())]);
        fetch_json(ACCOUNTING_API, request).await
    }

    async fn fiscal_years(&self) -> Result<Vec<FiscalYearModel>, ServerError> {
        fetch_json(ACCOUNTING_API, self.get("fiscal-years")).await
    }

    async fn current_treasury(&self) -> Result<TreasuryModel, ServerError> {
        fetch_json(ACCOUNTING_API, self.get("treasury/current")).await
    }

    async fn breakdown(
        &self,
        kind: BreakdownKind,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLineModel>, ServerError> {
        let mut request = self.get(kind.path());
        if let Some(id) = fiscal_year_id {
            request = request.query(&[("fiscalYearId", id)]);
        }
        fetch_json(ACCOUNTING_API, request).await
    }
}
