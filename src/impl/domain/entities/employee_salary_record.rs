use indexmap::IndexMap;

use super::accounting_operation::AccountingOperation;

/// Contract id used to group operations that carry none.
pub const UNKNOWN_CONTRACT: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeKey {
    pub employee_name: String,
    pub contract_id: String,
}

impl EmployeeKey {
    pub fn new(employee_name: &str, contract_id: Option<&str>) -> Self {
        Self {
            employee_name: employee_name.to_string(),
            contract_id: contract_id.unwrap_or(UNKNOWN_CONTRACT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSalaryRecord {
    pub employee_name: String,
    pub contract_id: Option<String>,
    pub total_salary: f64,
    pub total_contributions: f64,
    pub operations: Vec<AccountingOperation>,
}

impl EmployeeSalaryRecord {
    pub fn new(employee_name: impl Into<String>, contract_id: Option<String>) -> Self {
        Self {
            employee_name: employee_name.into(),
            contract_id,
            total_salary: 0.0,
            total_contributions: 0.0,
            operations: Vec::new(),
        }
    }

    /// Salary plus employer contributions.
    pub fn employer_cost(&self) -> f64 {
        self.total_salary + self.total_contributions
    }
}

/// Records keyed by employee and contract, iterated in creation order.
#[derive(Debug, Clone, Default)]
pub struct EmployeeSalaryMap {
    records: IndexMap<EmployeeKey, EmployeeSalaryRecord>,
}

impl EmployeeSalaryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, key: &EmployeeKey) -> Option<&EmployeeSalaryRecord> {
        self.records.get(key)
    }

    /// Record for `key`, created from `init` on first access.
    pub fn entry_or_insert_with<F>(&mut self, key: EmployeeKey, init: F) -> &mut EmployeeSalaryRecord
    where
        F: FnOnce() -> EmployeeSalaryRecord,
    {
        self.records.entry(key).or_insert_with(init)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeSalaryRecord> {
        self.records.values()
    }

    pub fn into_records(self) -> Vec<EmployeeSalaryRecord> {
        self.records.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_creation_order_and_reuses_existing_records() {
        let mut map = EmployeeSalaryMap::new();
        for (name, contract, salary) in [("Zoé", "C1", 1.0), ("Anne", "C2", 2.0), ("Zoé", "C1", 3.0)] {
            map.entry_or_insert_with(EmployeeKey::new(name, Some(contract)), || {
                EmployeeSalaryRecord::new(name, Some(contract.to_string()))
            })
            .total_salary += salary;
        }
        assert_eq!(map.len(), 2);
        let records = map.into_records();
        assert_eq!(records[0].employee_name, "Zoé");
        assert_eq!(records[0].total_salary, 4.0);
        assert_eq!(records[1].employee_name, "Anne");
    }
}
