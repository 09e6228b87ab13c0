use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::error::TransportError;
use super::request::FormRequest;
use super::runner::{HttpResponse, HttpTransport, SessionFactory};

/// Scripted transport that records every request it receives.
///
/// Cloned handles share expectations and history. Each opened session is a
/// clone tagged with its own session number, so tests can check which
/// requests travelled together.
#[derive(Clone)]
pub struct MockTransport {
    expectations: Arc<Mutex<Vec<MockExpectation>>>,
    call_history: Arc<Mutex<Vec<(usize, FormRequest)>>>,
    sessions_opened: Arc<AtomicUsize>,
    session: usize,
}

struct MockExpectation {
    url_fragment: String,
    #[allow(clippy::type_complexity)]
    fields_matcher: Option<Box<dyn Fn(&[(String, String)]) -> bool + Send + Sync>>,
    response: HttpResponse,
    times_called: usize,
    expected_times: Option<usize>,
}

pub struct MockRequestConfig {
    transport: MockTransport,
    expectation: MockExpectation,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(Vec::new())),
            call_history: Arc::new(Mutex::new(Vec::new())),
            sessions_opened: Arc::new(AtomicUsize::new(0)),
            session: 0,
        }
    }

    /// Expect a POST whose URL contains `url_fragment`.
    pub fn expect_post(&mut self, url_fragment: &str) -> MockRequestConfig {
        MockRequestConfig {
            transport: self.clone(),
            expectation: MockExpectation {
                url_fragment: url_fragment.to_string(),
                fields_matcher: None,
                response: HttpResponse {
                    status: 200,
                    body: String::new(),
                },
                times_called: 0,
                expected_times: None,
            },
        }
    }

    pub fn verify_called(&self, url_fragment: &str, times: usize) -> bool {
        let history = self.call_history.lock().unwrap();
        let count = history
            .iter()
            .filter(|(_, request)| request.url.contains(url_fragment))
            .count();
        count == times
    }

    pub fn get_call_history(&self) -> Vec<FormRequest> {
        self.call_history
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    /// Session number of every recorded request, in call order
    pub fn get_session_history(&self) -> Vec<usize> {
        self.call_history
            .lock()
            .unwrap()
            .iter()
            .map(|(session, _)| *session)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }

    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_form(&self, request: FormRequest) -> Result<HttpResponse, TransportError> {
        self.call_history
            .lock()
            .unwrap()
            .push((self.session, request.clone()));

        let mut expectations = self.expectations.lock().unwrap();

        for expectation in expectations.iter_mut() {
            if !request.url.contains(&expectation.url_fragment) {
                continue;
            }

            if let Some(ref fields_matcher) = expectation.fields_matcher {
                if !(fields_matcher)(&request.fields) {
                    continue;
                }
            }

            expectation.times_called += 1;

            if let Some(expected) = expectation.expected_times {
                if expectation.times_called > expected {
                    return Err(TransportError::MockExpectationNotMet(format!(
                        "POST to '{}' called {} times, expected {}",
                        request.url, expectation.times_called, expected
                    )));
                }
            }

            return Ok(expectation.response.clone());
        }

        Err(TransportError::MockExpectationNotMet(format!(
            "No expectation found for POST to {} {:?}",
            request.url, request.fields
        )))
    }
}

impl SessionFactory for MockTransport {
    fn open_session(&self) -> Result<Arc<dyn HttpTransport>, TransportError> {
        let session = self.sessions_opened.fetch_add(1, Ordering::SeqCst) + 1;
        let mut transport = self.clone();
        transport.session = session;
        Ok(Arc::new(transport))
    }
}

impl MockRequestConfig {
    pub fn with_fields<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&[(String, String)]) -> bool + Send + Sync + 'static,
    {
        self.expectation.fields_matcher = Some(Box::new(matcher));
        self
    }

    /// Only match requests that submit a field called `name`
    pub fn with_field(self, name: &str) -> Self {
        let name = name.to_string();
        self.with_fields(move |fields| fields.iter().any(|(key, _)| *key == name))
    }

    pub fn returns_status(mut self, status: u16) -> Self {
        self.expectation.response.status = status;
        self
    }

    pub fn returns_body(mut self, body: &str) -> Self {
        self.expectation.response.body = body.to_string();
        self
    }

    pub fn times(mut self, n: usize) -> Self {
        self.expectation.expected_times = Some(n);
        self
    }

    pub fn finish(self) {
        self.transport
            .expectations
            .lock()
            .unwrap()
            .push(self.expectation);
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}
