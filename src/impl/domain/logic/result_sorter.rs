use crate::entities::{EmployeeSalaryMap, EmployeeSalaryRecord};

use super::french_collation::CollationKey;

pub(crate) struct ResultSorter {
    map: EmployeeSalaryMap,
}

impl ResultSorter {
    pub(crate) fn new(map: EmployeeSalaryMap) -> Self {
        Self { map }
    }

    /// Records ordered by employee name under French collation. Equal names
    /// keep the map's insertion order.
    pub(crate) fn to_sorted_list(self) -> Vec<EmployeeSalaryRecord> {
        let mut records = self.map.into_records();
        records.sort_by_cached_key(|r| CollationKey::new(&r.employee_name));
        records
    }
}
