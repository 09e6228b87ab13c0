use async_trait::async_trait;
use reqwest::cookie::Jar;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

use super::error::TransportError;
use super::request::FormRequest;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("datepoll/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Sends form POSTs within one session.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_form(&self, request: FormRequest) -> Result<HttpResponse, TransportError>;
}

/// Opens transports that each carry their own, initially empty, cookie jar.
pub trait SessionFactory: Send + Sync {
    fn open_session(&self) -> Result<Arc<dyn HttpTransport>, TransportError>;
}

/// `reqwest` client bound to a private cookie jar.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(jar)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(&self, request: FormRequest) -> Result<HttpResponse, TransportError> {
        trace!("POST {} with fields {:?}", request.url, request.fields);

        let wrap = |source: reqwest::Error| TransportError::Request {
            url: request.url.clone(),
            source,
        };
        let response = self
            .client
            .post(&request.url)
            .form(&request.fields)
            .send()
            .await
            .map_err(wrap)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(wrap)?;
        trace!("{} answered {} ({} bytes)", request.url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}

/// Production factory: a fresh `reqwest` client per session.
#[derive(Debug, Clone)]
pub struct ReqwestSessionFactory {
    timeout: Duration,
}

impl ReqwestSessionFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ReqwestSessionFactory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl SessionFactory for ReqwestSessionFactory {
    fn open_session(&self) -> Result<Arc<dyn HttpTransport>, TransportError> {
        Ok(Arc::new(ReqwestTransport::new(self.timeout)?))
    }
}
