use serde::Deserialize;
use serde_json::Value;

/// Text field that also accepts numbers (account codes are sometimes sent
/// as `641100` instead of `"641100"`). Other JSON types read as `None`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct LenientStringModel(pub Option<String>);

impl<'de> Deserialize<'de> for LenientStringModel {
    fn deserialize<D>(deserializer: D) -> Result<LenientStringModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(LenientStringModel(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }))
    }
}

impl From<LenientStringModel> for Option<String> {
    fn from(m: LenientStringModel) -> Option<String> {
        m.0
    }
}
