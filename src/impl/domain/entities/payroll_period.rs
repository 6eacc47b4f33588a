use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;

use crate::errors::InvalidPayrollPeriod;

/// Calendar month a payroll run belongs to, written `YYYYMM` upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayrollPeriod {
    pub year: i32,
    pub month: u32,
}

impl PayrollPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, ServerError> {
        if !(1..=12).contains(&month) || !(1900..=9999).contains(&year) {
            return Err(InvalidPayrollPeriod::new(&format!("{year:04}{month:02}")));
        }
        Ok(Self { year, month })
    }
}

impl FromStr for PayrollPeriod {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidPayrollPeriod::new(s));
        }
        let year = s[..4].parse::<i32>().map_err(|_| InvalidPayrollPeriod::new(s))?;
        let month = s[4..].parse::<u32>().map_err(|_| InvalidPayrollPeriod::new(s))?;
        PayrollPeriod::new(year, month).map_err(|_| InvalidPayrollPeriod::new(s))
    }
}

impl fmt::Display for PayrollPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}
