use super::employee_salary_record::EmployeeSalaryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub total_salary: f64,
    pub total_contributions: f64,
    pub employer_cost: f64,
    pub employee_count: usize,
}

impl PayrollSummary {
    pub fn from_records(records: &[EmployeeSalaryRecord]) -> Self {
        let (total_salary, total_contributions) = records
            .iter()
            .fold((0.0, 0.0), |(salary, contributions), r| {
                (salary + r.total_salary, contributions + r.total_contributions)
            });
        Self {
            total_salary,
            total_contributions,
            employer_cost: total_salary + total_contributions,
            employee_count: records.len(),
        }
    }
}

/// Per-employee rows, sorted for display, and their totals.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReport {
    pub records: Vec<EmployeeSalaryRecord>,
    pub summary: PayrollSummary,
}

impl PayrollReport {
    pub fn new(records: Vec<EmployeeSalaryRecord>) -> Self {
        let summary = PayrollSummary::from_records(&records);
        Self { records, summary }
    }
}
