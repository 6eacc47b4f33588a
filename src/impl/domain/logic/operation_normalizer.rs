use crate::entities::{AccountingOperation, RawOperations};

pub(crate) struct OperationNormalizer {
    raw: RawOperations,
}

impl OperationNormalizer {
    pub(crate) fn new(raw: RawOperations) -> Self {
        Self { raw }
    }

    /// Flattens grouped operations in group order, keeping each group's
    /// internal order. Flat input passes through untouched.
    pub(crate) fn normalize(self) -> Vec<AccountingOperation> {
        match self.raw {
            RawOperations::Flat(operations) => operations,
            RawOperations::ByAccountCode(groups) => groups
                .into_iter()
                .flat_map(|(_code, operations)| operations)
                .collect(),
        }
    }
}
