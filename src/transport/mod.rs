//! HTTP form transport
//!
//! Trait seam between the poll protocol and the network. Production code
//! uses `reqwest` with a cookie jar per session; tests script responses with
//! [`MockTransport`].

pub mod error;
pub mod mock;
pub mod request;
pub mod runner;

#[cfg(test)]
mod tests;

pub use error::TransportError;
pub use mock::{MockRequestConfig, MockTransport};
pub use request::{FormRequest, FormRequestBuilder};
pub use runner::{
    HttpResponse, HttpTransport, ReqwestSessionFactory, ReqwestTransport, SessionFactory,
    DEFAULT_TIMEOUT,
};

use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct TransportManager {
    sessions: Arc<dyn SessionFactory>,
}

impl TransportManager {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self { sessions }
    }

    pub fn production(timeout: Duration) -> Self {
        Self::new(Arc::new(ReqwestSessionFactory::new(timeout)))
    }

    #[cfg(test)]
    pub fn mock() -> (Self, MockTransport) {
        let mock = MockTransport::new();
        let sessions = Arc::new(mock.clone()) as Arc<dyn SessionFactory>;
        (Self::new(sessions), mock)
    }

    /// Open a session with an empty cookie jar
    pub fn open_session(&self) -> Result<Arc<dyn HttpTransport>, TransportError> {
        self.sessions.open_session()
    }
}

impl Default for TransportManager {
    fn default() -> Self {
        Self::production(DEFAULT_TIMEOUT)
    }
}
