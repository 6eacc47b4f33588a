use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::accounting_repository::AccountingRepository,
    entities::{DashboardSnapshot, KpiMonth, MonthlyKpis},
};

#[async_trait]
pub trait DashboardUsecase: Send + Sync {
    /// Treasury, breakdowns and fiscal years, fetched concurrently. Fails as
    /// a whole if any one fetch fails.
    async fn snapshot(&self, fiscal_year_id: Option<&str>)
        -> Result<DashboardSnapshot, ServerError>;

    async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpis, ServerError>;
}

pub(crate) struct DashboardUsecaseImpl<R: AccountingRepository> {
    accounting_repository: R,
}

#[async_trait]
impl<R: AccountingRepository> DashboardUsecase for DashboardUsecaseImpl<R> {
    async fn snapshot(
        &self,
        fiscal_year_id: Option<&str>,
    ) -> Result<DashboardSnapshot, ServerError> {
        let repository = &self.accounting_repository;
        let (treasury, charges, revenues, fiscal_years) = futures::try_join!(
            repository.current_treasury(),
            repository.charges_breakdown(fiscal_year_id),
            repository.revenues_breakdown(fiscal_year_id),
            repository.fiscal_years(),
        )?;
        tracing::info!(
            charges = charges.len(),
            revenues = revenues.len(),
            fiscal_years = fiscal_years.len(),
            "fetched dashboard snapshot"
        );
        Ok(DashboardSnapshot {
            treasury,
            charges,
            revenues,
            fiscal_years,
        })
    }

    async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpis, ServerError> {
        self.accounting_repository.kpis(month).await
    }
}

impl<R: AccountingRepository> DashboardUsecaseImpl<R> {
    pub(crate) fn new(accounting_repository: R) -> Self {
        Self {
            accounting_repository,
        }
    }
}
