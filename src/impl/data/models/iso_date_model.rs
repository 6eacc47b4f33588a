use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoDate;

/// `YYYY-MM-DD`, also accepting a full ISO timestamp of which only the date
/// part is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date_part = s.trim().get(..10).unwrap_or(s);
        let d = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(m: ISODateModel) -> NaiveDate {
        m.0
    }
}
