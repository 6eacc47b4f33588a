use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{BreakdownLine, FiscalYear, KpiMonth, MonthlyKpis, Treasury};

#[async_trait]
pub trait AccountingRepository: Send + Sync {
    async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpis, ServerError>;
    async fn fiscal_years(&self) -> Result<Vec<FiscalYear>, ServerError>;
    async fn current_treasury(&self) -> Result<Treasury, ServerError>;
    async fn charges_breakdown(
        &self,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLine>, ServerError>;
    async fn revenues_breakdown(
        &self,
        fiscal_year_id: Option<&str>,
    ) -> Result<Vec<BreakdownLine>, ServerError>;
}
