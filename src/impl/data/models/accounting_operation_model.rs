use crate::entities::AccountingOperation;

use super::{
    accounting_amount_model::AccountingAmountModel, lenient_string_model::LenientStringModel,
};

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct AccountingOperationModel {
    debit: AccountingAmountModel,
    credit: AccountingAmountModel,
    operation_date: LenientStringModel,
    employee_full_name: LenientStringModel,
    contract_id: LenientStringModel,
    account_id: LenientStringModel,
    account_name: LenientStringModel,
}

impl From<AccountingOperationModel> for AccountingOperation {
    fn from(m: AccountingOperationModel) -> AccountingOperation {
        AccountingOperation {
            debit: m.debit.into(),
            credit: m.credit.into(),
            operation_date: m.operation_date.0.unwrap_or_default(),
            employee_full_name: m.employee_full_name.into(),
            contract_id: m.contract_id.into(),
            account_id: m.account_id.0.unwrap_or_default(),
            account_name: m.account_name.0.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize as _;
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_camel_case_operation() {
        let v = json!({
            "debit": 3000,
            "credit": null,
            "operationDate": "2024-05-31",
            "employeeFullName": "Jean Dupont",
            "contractId": "C1",
            "accountId": "641100",
            "accountName": "SALAIRES",
            "journal": "PAIE"
        });
        let op: AccountingOperation = AccountingOperationModel::deserialize(&v).unwrap().into();
        assert_eq!(op.debit, Some(3000.0));
        assert_eq!(op.credit, None);
        assert_eq!(op.employee_full_name.as_deref(), Some("Jean Dupont"));
        assert_eq!(op.contract_id.as_deref(), Some("C1"));
        assert_eq!(op.account_id, "641100");
    }

    #[test]
    fn tolerates_missing_and_mistyped_fields() {
        let v = json!({ "accountId": 645100, "debit": "900,00", "contractId": false });
        let op: AccountingOperation = AccountingOperationModel::deserialize(&v).unwrap().into();
        assert_eq!(op.account_id, "645100");
        assert_eq!(op.debit, Some(900.0));
        assert_eq!(op.contract_id, None);
        assert_eq!(op.employee_full_name, None);
        assert_eq!(op.account_name, "");
        assert_eq!(op.operation_date, "");
    }
}
