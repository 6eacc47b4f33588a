use iso_currency::Currency;

use crate::entities::{PayrollReport, UNKNOWN_CONTRACT};

use super::utils::format_amount;

const NAME_WIDTH: usize = 28;
const CONTRACT_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 16;

/// Plain-text rendering of a payroll report, one row per employee and
/// contract, followed by the totals.
pub(crate) struct SalaryTablePrinter {
    currency: Currency,
}

impl SalaryTablePrinter {
    pub(crate) fn new() -> Self {
        Self {
            currency: Currency::EUR,
        }
    }

    pub(crate) fn print(&self, report: &PayrollReport) -> String {
        let mut output = String::new();
        self.print_row(
            &mut output,
            "Salarié",
            "Contrat",
            ["Salaires", "Cotisations", "Coût employeur"].map(String::from),
        );
        output.push_str(&self.rule());

        for record in &report.records {
            self.print_row(
                &mut output,
                &record.employee_name,
                record.contract_id.as_deref().unwrap_or(UNKNOWN_CONTRACT),
                [
                    record.total_salary,
                    record.total_contributions,
                    record.employer_cost(),
                ]
                .map(|a| format_amount(a, self.currency)),
            );
        }

        output.push_str(&self.rule());
        let summary = &report.summary;
        self.print_row(
            &mut output,
            &format!("Total ({} salariés)", summary.employee_count),
            "",
            [
                summary.total_salary,
                summary.total_contributions,
                summary.employer_cost,
            ]
            .map(|a| format_amount(a, self.currency)),
        );
        output
    }

    fn print_row(&self, output: &mut String, name: &str, contract: &str, amounts: [String; 3]) {
        let wrapped = textwrap::wrap(name, NAME_WIDTH);
        let mut lines = wrapped.iter();
        let first = lines.next().map(|l| &**l).unwrap_or("");
        output.push_str(&format!(
            "{:<NAME_WIDTH$} {:<CONTRACT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$} {:>AMOUNT_WIDTH$}\n",
            first, contract, amounts[0], amounts[1], amounts[2],
        ));
        for line in lines {
            output.push_str(&format!("{}\n", line));
        }
    }

    fn rule(&self) -> String {
        format!(
            "{}\n",
            "-".repeat(NAME_WIDTH + CONTRACT_WIDTH + 3 * AMOUNT_WIDTH + 4)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EmployeeSalaryRecord;

    fn record(
        name: &str,
        contract: Option<&str>,
        salary: f64,
        contributions: f64,
    ) -> EmployeeSalaryRecord {
        let mut r = EmployeeSalaryRecord::new(name, contract.map(Into::into));
        r.total_salary = salary;
        r.total_contributions = contributions;
        r
    }

    #[test]
    fn prints_one_row_per_record_and_totals() {
        let report = PayrollReport::new(vec![
            record("Anne Martin", None, 2500.0, 120.0),
            record("Jean Dupont", Some("C1"), 3000.0, 900.0),
        ]);
        let table = SalaryTablePrinter::new().print(&report);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Salarié"));
        assert!(lines[2].starts_with("Anne Martin"));
        assert!(lines[2].contains(UNKNOWN_CONTRACT));
        assert!(lines[3].contains("C1"));
        assert!(lines[3].contains(&format_amount(3900.0, Currency::EUR)));
        assert!(lines[5].starts_with("Total (2 salariés)"));
        assert!(lines[5].contains(&format_amount(6520.0, Currency::EUR)));
    }

    #[test]
    fn long_names_wrap_onto_continuation_lines() {
        let report = PayrollReport::new(vec![record(
            "Marie-Christine Delacroix-Beauregard de Saint-Exupéry",
            Some("C7"),
            1.0,
            0.0,
        )]);
        let table = SalaryTablePrinter::new().print(&report);
        let lines: Vec<_> = table.lines().collect();
        assert!(lines.len() >= 6);
        assert!(lines[2].contains("C7"));
        assert!(!lines[3].contains("C7"));
    }
}
