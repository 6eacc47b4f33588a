use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{PayrollPeriod, RawOperations};

#[async_trait]
pub trait PayrollRepository: Send + Sync {
    async fn accounting_operations(
        &self,
        period: PayrollPeriod,
    ) -> Result<RawOperations, ServerError>;
}
