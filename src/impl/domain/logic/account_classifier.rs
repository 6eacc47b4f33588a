use crate::entities::AccountCategory;

const SALARY_PREFIXES: [&str; 1] = ["641"];
const CONTRIBUTION_PREFIXES: [&str; 2] = ["645", "647"];
const SALARY_KEYWORDS: [&str; 1] = ["SALAIRE"];
const CONTRIBUTION_KEYWORDS: [&str; 2] = ["COTISATION", "CHARGE SOCIALE"];

/// Classifies a chart-of-accounts entry (French PCG) as payroll expense,
/// social-charge expense, or neither.
///
/// Matches on the account code prefix (641 remunerations, 645/647 social
/// charges) or on keywords in the upper-cased account name.
pub(crate) fn classify(account_id: &str, account_name: &str) -> AccountCategory {
    let name = account_name.to_uppercase();

    let is_salary_account = SALARY_PREFIXES.iter().any(|p| account_id.starts_with(p))
        || SALARY_KEYWORDS.iter().any(|k| name.contains(k));
    let is_contribution_account = CONTRIBUTION_PREFIXES.iter().any(|p| account_id.starts_with(p))
        || CONTRIBUTION_KEYWORDS.iter().any(|k| name.contains(k));

    AccountCategory {
        is_salary_related: is_salary_account || is_contribution_account,
        is_salary_account,
        is_contribution_account,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SalaryBucket;

    #[test]
    fn salary_by_code_prefix() {
        let c = classify("641100", "Rémunérations");
        assert!(c.is_salary_related);
        assert!(c.is_salary_account);
        assert!(!c.is_contribution_account);
        assert_eq!(c.bucket(), Some(SalaryBucket::Salary));
    }

    #[test]
    fn contributions_by_code_prefix() {
        for id in ["645100", "647000"] {
            let c = classify(id, "Divers");
            assert!(c.is_salary_related);
            assert!(!c.is_salary_account);
            assert!(c.is_contribution_account);
            assert_eq!(c.bucket(), Some(SalaryBucket::Contribution));
        }
    }

    #[test]
    fn name_keywords_are_case_insensitive() {
        assert!(classify("421000", "salaires nets").is_salary_account);
        assert!(classify("431000", "Cotisations URSSAF").is_contribution_account);
        assert!(classify("437000", "autres charge sociale").is_contribution_account);
    }

    #[test]
    fn sales_account_is_irrelevant() {
        let c = classify("706100", "Prestations de services");
        assert_eq!(c, AccountCategory::default());
        assert_eq!(c.bucket(), None);
    }

    #[test]
    fn salary_takes_precedence_over_contribution() {
        // Salary code with a contribution label.
        let c = classify("641100", "COTISATION MUTUELLE");
        assert!(c.is_salary_account && c.is_contribution_account);
        assert_eq!(c.bucket(), Some(SalaryBucket::Salary));

        // Contribution code with a salary label.
        let c = classify("645000", "Charges sur salaires");
        assert!(c.is_salary_account && c.is_contribution_account);
        assert_eq!(c.bucket(), Some(SalaryBucket::Salary));
    }

    #[test]
    fn prefix_must_be_at_start() {
        assert!(!classify("106410", "Réserves").is_salary_related);
        // Leading whitespace is not stripped from the code.
        assert!(!classify(" 641100", "X").is_salary_related);
    }
}
