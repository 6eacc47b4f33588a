use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::accounting_api_datasource::{AccountingApiDatasource, BreakdownKind},
    domain::repositories::accounting_repository::AccountingRepository,
    entities::{BreakdownLine, FiscalYear, KpiMonth, MonthlyKpis, Treasury},
};

pub(crate) struct AccountingRepositoryImpl<DS: AccountingApiDatasource> {
    datasource: DS,
}

impl<DS: AccountingApiDatasource> AccountingRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS) -> Self {
        Self { datasource }
    }

    async fn breakdown(
        &self,
        kind: BreakdownKind,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLine>, ServerError> {
        Ok(self
            .datasource
            .breakdown(kind, fiscal_year_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

#[async_trait]
impl<DS: AccountingApiDatasource> AccountingRepository for AccountingRepositoryImpl<DS> {
    async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpis, ServerError> {
        Ok(self.datasource.kpis(month).await?.into_entity(month))
    }

    async fn fiscal_years(&self) -> Result<Vec<FiscalYear>, ServerError> {
        let mut fiscal_years: Vec<FiscalYear> = self
            .datasource
            .fiscal_years()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        fiscal_years.sort_by_key(|fy| fy.start_date);
        Ok(fiscal_years)
    }

    async fn current_treasury(&self) -> Result<Treasury, ServerError> {
        Ok(self.datasource.current_treasury().await?.into())
    }

    async fn charges_breakdown(
        &self,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLine>, ServerError> {
        self.breakdown(BreakdownKind::Charges, fiscal_year_id).await
    }

    async fn revenues_breakdown(
        &self,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLine>, ServerError> {
        self.breakdown(BreakdownKind::Revenues, fiscal_year_id).await
    }
}
