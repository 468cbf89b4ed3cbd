use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

pub static HTTP_CLIENT: Lazy<Client> =
    Lazy::new(|| build_client(None).expect("Failed to create HTTP client"));

pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().tcp_keepalive(Duration::from_secs(60));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Sends the request and turns a non-success status into [`Error::Http`]
/// carrying `failure_message`.
pub async fn send_checked(request: RequestBuilder, failure_message: &str) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        log::warn!(
            "upstream.failure status={} url={} message='{}'",
            status,
            response.url(),
            failure_message
        );
        return Err(Error::http(failure_message, status));
    }

    Ok(response)
}
