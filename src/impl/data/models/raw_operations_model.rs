use fractic_server_error::ServerError;
use serde::Deserialize as _;
use serde_json::{Map, Value};

use crate::{
    entities::{AccountingOperation, RawOperations},
    errors::{MalformedOperationsPayload, MissingRawData},
};

use super::accounting_operation_model::AccountingOperationModel;

pub(crate) const RAW_DATA_FIELD: &str = "rawData";

pub(crate) struct RawOperationsModel;

impl RawOperationsModel {
    /// Resolves a `{"rawData": ...}` payload into its concrete shape.
    ///
    /// `rawData` is either a list of operations or an object mapping account
    /// codes to lists of operations. Entries under a code that are not lists,
    /// and list elements that are not objects, are dropped.
    pub(crate) fn from_payload(payload: &Value) -> Result<RawOperations, ServerError> {
        let envelope = payload
            .as_object()
            .ok_or_else(|| MalformedOperationsPayload::new(json_type(payload)))?;
        let raw_data = match envelope.get(RAW_DATA_FIELD) {
            None | Some(Value::Null) => return Err(MissingRawData::new()),
            Some(v) => v,
        };
        Self::from_raw_data(raw_data)
    }

    pub(crate) fn from_raw_data(raw_data: &Value) -> Result<RawOperations, ServerError> {
        match raw_data {
            Value::Array(items) => Ok(RawOperations::Flat(operations(items))),
            Value::Object(groups) => Ok(RawOperations::ByAccountCode(grouped(groups))),
            other => Err(MalformedOperationsPayload::new(json_type(other))),
        }
    }
}

fn grouped(groups: &Map<String, Value>) -> Vec<(String, Vec<AccountingOperation>)> {
    groups
        .iter()
        .filter_map(|(code, value)| match value {
            Value::Array(items) => Some((code.clone(), operations(items))),
            other => {
                tracing::debug!(code = %code, found = json_type(other), "skipping non-list group");
                None
            }
        })
        .collect()
}

fn operations(items: &[Value]) -> Vec<AccountingOperation> {
    items
        .iter()
        .filter_map(|item| {
            if !item.is_object() {
                tracing::debug!(found = json_type(item), "skipping non-object operation");
                return None;
            }
            AccountingOperationModel::deserialize(item)
                .map(Into::into)
                .map_err(|e| tracing::debug!(error = %e, "skipping unreadable operation"))
                .ok()
        })
        .collect()
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flat_raw_data() {
        let payload = json!({ "rawData": [
            { "accountId": "641100", "debit": 1 },
            { "accountId": "645100", "debit": 2 }
        ]});
        match RawOperationsModel::from_payload(&payload).unwrap() {
            RawOperations::Flat(ops) => {
                assert_eq!(ops.len(), 2);
                assert_eq!(ops[0].account_id, "641100");
            }
            other => panic!("expected flat operations, got {other:?}"),
        }
    }

    #[test]
    fn grouped_raw_data_keeps_document_order_and_skips_non_lists() {
        let payload = json!({ "rawData": {
            "645100": [{ "accountId": "645100" }],
            "641100": [{ "accountId": "641100" }, 7, { "accountId": "641100" }],
            "meta": { "count": 3 },
            "total": 42
        }});
        match RawOperationsModel::from_payload(&payload).unwrap() {
            RawOperations::ByAccountCode(groups) => {
                let codes: Vec<_> = groups.iter().map(|(c, _)| c.as_str()).collect();
                assert_eq!(codes, ["645100", "641100"]);
                assert_eq!(groups[1].1.len(), 2);
            }
            other => panic!("expected grouped operations, got {other:?}"),
        }
    }

    #[test]
    fn missing_raw_data_is_an_error() {
        assert!(RawOperationsModel::from_payload(&json!({ "data": [] })).is_err());
        assert!(RawOperationsModel::from_payload(&json!({ "rawData": null })).is_err());
    }

    #[test]
    fn non_object_payload_is_an_error() {
        assert!(RawOperationsModel::from_payload(&json!([1, 2])).is_err());
        assert!(RawOperationsModel::from_payload(&json!("rawData")).is_err());
        assert!(RawOperationsModel::from_payload(&json!({ "rawData": 12 })).is_err());
    }
}
