use crate::config::{Endpoints, WordBankConfig};
use crate::error::Result;
use crate::infrastructure::http::{HTTP_CLIENT, build_client};
use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Shared default client: public endpoints, no request timeout.
pub static CORPUS_CLIENT: Lazy<CorpusClient> =
    Lazy::new(|| CorpusClient::from_parts(HTTP_CLIENT.clone(), Endpoints::default()));

/// HTTP access to the upstream text services. Holds no mutable state, so one
/// instance can serve any number of concurrent callers.
#[derive(Clone, Debug)]
pub struct CorpusClient {
    http: Client,
    endpoints: Endpoints,
}

impl CorpusClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        Self::with_timeout(endpoints, None)
    }

    pub fn with_timeout(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self::from_parts(build_client(timeout)?, endpoints))
    }

    pub fn from_config(config: &WordBankConfig) -> Result<Self> {
        Self::with_timeout(config.endpoints.clone(), config.http_timeout)
    }

    pub fn from_parts(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}
