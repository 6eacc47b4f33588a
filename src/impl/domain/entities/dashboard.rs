use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::InvalidKpiMonth;

/// One line of a charges or revenues breakdown, usually one account code.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct BreakdownLine {
    pub code: String,
    pub label: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYear {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FiscalYear {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Treasury {
    pub balance: f64,
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyKpis {
    pub month: KpiMonth,
    pub revenue: f64,
    pub charges: f64,
    pub net_result: f64,
    pub treasury: f64,
}

/// Everything the dashboard home needs, fetched together.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub treasury: Treasury,
    pub charges: Vec<BreakdownLine>,
    pub revenues: Vec<BreakdownLine>,
    pub fiscal_years: Vec<FiscalYear>,
}

/// Month selector of the KPI endpoint, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(into = "String")]
pub struct KpiMonth {
    pub year: i32,
    pub month: u32,
}

impl FromStr for KpiMonth {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern =
            Regex::new(r"^(\d{4})-(0[1-9]|1[0-2])$").expect("hardcoded regex should be valid");
        let caps = pattern
            .captures(s.trim())
            .ok_or_else(|| InvalidKpiMonth::new(s))?;
        Ok(KpiMonth {
            year: caps[1].parse().map_err(|_| InvalidKpiMonth::new(s))?,
            month: caps[2].parse().map_err(|_| InvalidKpiMonth::new(s))?,
        })
    }
}

impl fmt::Display for KpiMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<KpiMonth> for String {
    fn from(m: KpiMonth) -> String {
        m.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpi_month_round_trips_through_display() {
        let m: KpiMonth = "2024-03".parse().unwrap();
        assert_eq!(m, KpiMonth { year: 2024, month: 3 });
        assert_eq!(m.to_string(), "2024-03");
    }

    #[test]
    fn kpi_month_rejects_other_shapes() {
        assert!("202403".parse::<KpiMonth>().is_err());
        assert!("2024-13".parse::<KpiMonth>().is_err());
        assert!("24-03".parse::<KpiMonth>().is_err());
    }

    #[test]
    fn fiscal_year_bounds_are_inclusive() {
        let fy = FiscalYear {
            id: "FY24".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        };
        assert!(fy.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(fy.contains(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert!(!fy.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }
}
