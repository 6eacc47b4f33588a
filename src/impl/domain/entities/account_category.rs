#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountCategory {
    pub is_salary_related: bool,
    pub is_salary_account: bool,
    pub is_contribution_account: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryBucket {
    Salary,
    Contribution,
}

impl AccountCategory {
    /// Bucket the amount is summed into.
    ///
    /// Salary wins when an account matches both the salary and the
    /// contribution rules (ex. code "641..." labelled "COTISATION ..."), so
    /// an operation is never counted twice.
    pub fn bucket(&self) -> Option<SalaryBucket> {
        if !self.is_salary_related {
            None
        } else if self.is_salary_account {
            Some(SalaryBucket::Salary)
        } else if self.is_contribution_account {
            Some(SalaryBucket::Contribution)
        } else {
            None
        }
    }
}
