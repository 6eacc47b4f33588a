use std::time::Duration;

use fractic_server_error::ServerError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::errors::{HttpClientSetupFailed, MalformedResponse, UpstreamStatus, UpstreamUnreachable};

pub(crate) fn build_client(api: &str, timeout: Duration) -> Result<Client, ServerError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| HttpClientSetupFailed::with_debug(api, &e))
}

/// Sends the request and decodes a JSON body. Transport failures, non-2xx
/// statuses and undecodable bodies map to distinct errors.
pub(crate) async fn fetch_json<T>(api: &str, request: RequestBuilder) -> Result<T, ServerError>
where
    T: DeserializeOwned,
{
    let response = request.send().await.map_err(|e| {
        tracing::warn!(api, error = %e, "upstream request failed");
        UpstreamUnreachable::with_debug(api, &e)
    })?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(api, status = status.as_u16(), "upstream returned an error status");
        return Err(UpstreamStatus::new(api, status.as_u16()));
    }
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(api, error = %e, "upstream response could not be decoded");
        MalformedResponse::with_debug(api, &e)
    })
}
