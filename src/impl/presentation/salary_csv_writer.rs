use fractic_server_error::ServerError;

use crate::{
    entities::{EmployeeSalaryRecord, UNKNOWN_CONTRACT},
    errors::CsvExportFailed,
};

/// CSV export of employee salaries, `;`-separated so it opens directly in
/// French spreadsheet software. Amounts are plain decimals with two places.
pub(crate) struct SalaryCsvWriter;

impl SalaryCsvWriter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn write(&self, records: &[EmployeeSalaryRecord]) -> Result<String, ServerError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(Vec::new());
        writer
            .write_record([
                "employee_name",
                "contract_id",
                "total_salary",
                "total_contributions",
                "employer_cost",
                "operation_count",
            ])
            .map_err(|e| CsvExportFailed::with_debug(&e))?;
        for r in records {
            writer
                .write_record([
                    r.employee_name.clone(),
                    r.contract_id
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_CONTRACT.to_string()),
                    format!("{:.2}", r.total_salary),
                    format!("{:.2}", r.total_contributions),
                    format!("{:.2}", r.employer_cost()),
                    r.operations.len().to_string(),
                ])
                .map_err(|e| CsvExportFailed::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvExportFailed::with_debug(e.error()))?;
        String::from_utf8(bytes).map_err(|e| CsvExportFailed::with_debug(&e))
    }
}
