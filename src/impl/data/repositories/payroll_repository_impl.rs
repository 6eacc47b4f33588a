use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::payroll_api_datasource::PayrollApiDatasource,
        models::raw_operations_model::RawOperationsModel,
    },
    domain::repositories::payroll_repository::PayrollRepository,
    entities::{PayrollPeriod, RawOperations},
};

pub(crate) struct PayrollRepositoryImpl<DS: PayrollApiDatasource> {
    datasource: DS,
}

impl<DS: PayrollApiDatasource> PayrollRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS) -> Self {
        Self { datasource }
    }
}

#[async_trait]
impl<DS: PayrollApiDatasource> PayrollRepository for PayrollRepositoryImpl<DS> {
    async fn accounting_operations(
        &self,
        period: PayrollPeriod,
    ) -> Result<RawOperations, ServerError> {
        let payload = self.datasource.accounting_operations(period).await?;
        RawOperationsModel::from_payload(&payload)
    }
}
