use crate::entities::{
    AccountingOperation, EmployeeKey, EmployeeSalaryMap, EmployeeSalaryRecord, SalaryBucket,
};

use super::account_classifier::classify;

pub(crate) struct EmployeeAggregator<'a> {
    operations: &'a [AccountingOperation],
}

impl<'a> EmployeeAggregator<'a> {
    pub(crate) fn new(operations: &'a [AccountingOperation]) -> Self {
        Self { operations }
    }

    /// Folds salary-related operations into one record per employee and
    /// contract, in input order.
    ///
    /// Operations on other accounts, or without an employee name, leave the
    /// map untouched.
    pub(crate) fn aggregate(self) -> EmployeeSalaryMap {
        self.operations
            .iter()
            .fold(EmployeeSalaryMap::new(), |mut map, op| {
                let category = classify(&op.account_id, &op.account_name);
                if !category.is_salary_related {
                    return map;
                }
                let Some(employee_name) = op.employee_name() else {
                    return map;
                };

                let key = EmployeeKey::new(employee_name, op.contract_id.as_deref());
                let record = map.entry_or_insert_with(key, || {
                    EmployeeSalaryRecord::new(employee_name, op.contract_id.clone())
                });
                record.operations.push(op.clone());
                match category.bucket() {
                    Some(SalaryBucket::Salary) => record.total_salary += op.amount(),
                    Some(SalaryBucket::Contribution) => record.total_contributions += op.amount(),
                    None => {}
                }
                map
            })
    }
}
