/// One ledger line as reported by the payroll platform.
///
/// At most one of `debit` / `credit` is meaningful; aggregation reads the
/// debit first and falls back to the credit.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingOperation {
    pub debit: Option<f64>,
    pub credit: Option<f64>,
    pub operation_date: String,
    pub employee_full_name: Option<String>,
    pub contract_id: Option<String>,
    pub account_id: String,
    pub account_name: String,
}

impl AccountingOperation {
    /// Absolute booked amount, `0.0` when neither side is set.
    pub fn amount(&self) -> f64 {
        self.debit.or(self.credit).unwrap_or(0.0).abs()
    }

    /// Employee attribution; an empty name counts as none.
    pub fn employee_name(&self) -> Option<&str> {
        self.employee_full_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}
