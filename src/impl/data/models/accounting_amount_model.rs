use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::InvalidAccountingAmount;

/// Amount as found in upstream payloads: a JSON number, or a string in
/// either French (`1 234,56`) or English (`1,234.56`) notation, optionally
/// negative in accounting parentheses.
///
/// Anything unreadable deserializes to `None` rather than failing the whole
/// payload.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct AccountingAmountModel(pub Option<f64>);

impl FromStr for AccountingAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}' && *c != '€')
            .collect();
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')');
        let normalized = if numeric_part.contains('.') {
            numeric_part.replace(',', "")
        } else {
            numeric_part.replace(',', ".")
        };
        let amount = normalized
            .parse::<f64>()
            .map_err(|_| InvalidAccountingAmount::new(s))?;
        Ok(AccountingAmountModel(Some(if is_negative {
            -amount
        } else {
            amount
        })))
    }
}

impl<'de> Deserialize<'de> for AccountingAmountModel {
    fn deserialize<D>(deserializer: D) -> Result<AccountingAmountModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => AccountingAmountModel(n.as_f64()),
            Value::String(s) if s.trim().is_empty() => AccountingAmountModel(None),
            Value::String(s) => AccountingAmountModel::from_str(&s).unwrap_or_else(|_| {
                tracing::debug!(value = %s, "ignoring unreadable amount");
                AccountingAmountModel(None)
            }),
            _ => AccountingAmountModel(None),
        })
    }
}

impl From<AccountingAmountModel> for Option<f64> {
    fn from(m: AccountingAmountModel) -> Option<f64> {
        m.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<f64> {
        AccountingAmountModel::from_str(s).ok().and_then(|m| m.0)
    }

    #[test]
    fn parses_french_and_english_notation() {
        assert_eq!(parse("1 234,56"), Some(1234.56));
        assert_eq!(parse("1\u{202f}234,56 €"), Some(1234.56));
        assert_eq!(parse("1,234.56"), Some(1234.56));
        assert_eq!(parse("3000"), Some(3000.0));
        assert_eq!(parse("-42,5"), Some(-42.5));
    }

    #[test]
    fn parentheses_mean_negative() {
        assert_eq!(parse("(12.00)"), Some(-12.0));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(AccountingAmountModel::from_str("n/a").is_err());
    }

    #[test]
    fn deserialization_never_fails() {
        let read = |v: Value| AccountingAmountModel::deserialize(&v).unwrap().0;
        assert_eq!(read(serde_json::json!(900)), Some(900.0));
        assert_eq!(read(serde_json::json!("900,50")), Some(900.5));
        assert_eq!(read(serde_json::json!("n/a")), None);
        assert_eq!(read(serde_json::json!(null)), None);
        assert_eq!(read(serde_json::json!({"value": 1})), None);
    }
}
