use super::accounting_operation::AccountingOperation;

/// Accounting operations as delivered by the payroll platform, either already
/// flat or grouped under their account code.
///
/// Resolved once from the JSON payload; everything downstream of the
/// normalizer only sees a flat `Vec<AccountingOperation>`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOperations {
    Flat(Vec<AccountingOperation>),
    /// Groups in JSON document order, not sorted by code: a payload keyed
    /// `{"645100": .., "641100": ..}` yields the 645100 group first. Only the
    /// order of each record's `operations` (and of equal-name records) depends
    /// on it; totals do not.
    ByAccountCode(Vec<(String, Vec<AccountingOperation>)>),
}

impl Default for RawOperations {
    fn default() -> Self {
        RawOperations::Flat(Vec::new())
    }
}
