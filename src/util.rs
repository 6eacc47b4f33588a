use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    config::DashboardConfig,
    data::{
        datasources::{
            accounting_api_datasource::AccountingApiDatasourceImpl,
            payroll_api_datasource::PayrollApiDatasourceImpl,
        },
        repositories::{
            accounting_repository_impl::AccountingRepositoryImpl,
            payroll_repository_impl::PayrollRepositoryImpl,
        },
    },
    domain::usecases::{
        dashboard_usecase::{DashboardUsecase, DashboardUsecaseImpl},
        payroll_usecase::{report_from_payload, PayrollUsecase, PayrollUsecaseImpl},
    },
    entities::{
        DashboardSnapshot, EmployeeSalaryRecord, KpiMonth, MonthlyKpis, PayrollPeriod,
        PayrollReport,
    },
    errors::InvalidJson,
    presentation::{
        salary_csv_writer::SalaryCsvWriter, salary_table_printer::SalaryTablePrinter,
    },
    repositories::{AccountingRepository, PayrollRepository},
};

pub type SalaryTable = String;

/// Entry point of the dashboard backend.
///
/// Owns one HTTP client per upstream API for as long as it lives; create one
/// per request scope (or share it), nothing is cached globally.
pub struct PayrollDashboardUtil {
    payroll_usecase: Box<dyn PayrollUsecase>,
    dashboard_usecase: Box<dyn DashboardUsecase>,
}

impl PayrollDashboardUtil {
    pub fn new(config: &DashboardConfig) -> Result<Self, ServerError> {
        let payroll_datasource =
            PayrollApiDatasourceImpl::new(config.payroll.clone(), config.request_timeout())?;
        let accounting_datasource =
            AccountingApiDatasourceImpl::new(config.accounting.clone(), config.request_timeout())?;
        Ok(Self::with_repositories(
            PayrollRepositoryImpl::new(payroll_datasource),
            AccountingRepositoryImpl::new(accounting_datasource),
        ))
    }

    /// Same facade on top of custom data sources (ex. a cache or fixtures).
    pub fn with_repositories<P, A>(payroll_repository: P, accounting_repository: A) -> Self
    where
        P: PayrollRepository + 'static,
        A: AccountingRepository + 'static,
    {
        Self {
            payroll_usecase: Box::new(PayrollUsecaseImpl::new(payroll_repository)),
            dashboard_usecase: Box::new(DashboardUsecaseImpl::new(accounting_repository)),
        }
    }

    pub async fn employee_salaries(
        &self,
        period: PayrollPeriod,
    ) -> Result<(PayrollReport, SalaryTable), ServerError> {
        let report = self.payroll_usecase.employee_salaries(period).await?;
        let table = render_salary_table(&report);
        Ok((report, table))
    }

    pub fn employee_salaries_from_payload(
        &self,
        payload: &Value,
    ) -> Result<(PayrollReport, SalaryTable), ServerError> {
        let report = self.payroll_usecase.employee_salaries_from_payload(payload)?;
        let table = render_salary_table(&report);
        Ok((report, table))
    }

    pub async fn dashboard_snapshot(
        &self,
        fiscal_year_id: Option<&str>,
    ) -> Result<DashboardSnapshot, ServerError> {
        self.dashboard_usecase.snapshot(fiscal_year_id).await
    }

    pub async fn kpis(&self, month: KpiMonth) -> Result<MonthlyKpis, ServerError> {
        self.dashboard_usecase.kpis(month).await
    }
}

/// Payroll report from a `{"rawData": ...}` JSON document, without any
/// upstream call.
pub fn payroll_report_from_json(json: &str) -> Result<PayrollReport, ServerError> {
    let payload: Value = serde_json::from_str(json).map_err(|e| InvalidJson::with_debug(&e))?;
    report_from_payload(&payload)
}

pub fn render_salary_table(report: &PayrollReport) -> SalaryTable {
    SalaryTablePrinter::new().print(report)
}

pub fn export_salary_csv(records: &[EmployeeSalaryRecord]) -> Result<String, ServerError> {
    SalaryCsvWriter::new().write(records)
}
