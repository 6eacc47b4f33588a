use async_trait::async_trait;
use fractic_server_error::ServerError;
use serde_json::Value;

use crate::{
    data::models::raw_operations_model::RawOperationsModel,
    domain::{
        logic::{
            employee_aggregator::EmployeeAggregator, operation_normalizer::OperationNormalizer,
            result_sorter::ResultSorter,
        },
        repositories::payroll_repository::PayrollRepository,
    },
    entities::{PayrollPeriod, PayrollReport, RawOperations},
};

#[async_trait]
pub trait PayrollUsecase: Send + Sync {
    async fn employee_salaries(&self, period: PayrollPeriod)
        -> Result<PayrollReport, ServerError>;

    fn employee_salaries_from_payload(&self, payload: &Value)
        -> Result<PayrollReport, ServerError>;
}

pub(crate) struct PayrollUsecaseImpl<R: PayrollRepository> {
    payroll_repository: R,
}

#[async_trait]
impl<R: PayrollRepository> PayrollUsecase for PayrollUsecaseImpl<R> {
    async fn employee_salaries(
        &self,
        period: PayrollPeriod,
    ) -> Result<PayrollReport, ServerError> {
        let raw = self.payroll_repository.accounting_operations(period).await?;
        Ok(build_report(raw))
    }

    fn employee_salaries_from_payload(
        &self,
        payload: &Value,
    ) -> Result<PayrollReport, ServerError> {
        report_from_payload(payload)
    }
}

impl<R: PayrollRepository> PayrollUsecaseImpl<R> {
    pub(crate) fn new(payroll_repository: R) -> Self {
        Self { payroll_repository }
    }
}

/// Rejects payloads without usable `rawData` before any aggregation.
pub(crate) fn report_from_payload(payload: &Value) -> Result<PayrollReport, ServerError> {
    Ok(build_report(RawOperationsModel::from_payload(payload)?))
}

/// normalize -> aggregate -> sort -> summarize.
pub(crate) fn build_report(raw: RawOperations) -> PayrollReport {
    let operations = OperationNormalizer::new(raw).normalize();
    let salaries = EmployeeAggregator::new(&operations).aggregate();
    let report = PayrollReport::new(ResultSorter::new(salaries).to_sorted_list());
    tracing::info!(
        operations = operations.len(),
        employees = report.summary.employee_count,
        employer_cost = report.summary.employer_cost,
        "aggregated payroll operations"
    );
    report
}
