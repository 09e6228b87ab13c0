//! One poll-creation session
//!
//! A [`PollSession`] owns the cookie-carrying transport for the three
//! creation requests. It is created per call and dropped with it.

use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::debug;

use super::date_format::ServerDateFormat;
use super::error::{ProtocolError, Step};
use super::form;
use super::html;
use super::types::{PollOptions, PollResult};
use crate::error::Result;
use crate::transport::{FormRequest, FormRequestBuilder, HttpResponse, HttpTransport};

const DATE_FORMAT_SELECTOR: &str = "#day0";
const DATE_FORMAT_ATTRIBUTE: &str = "data-date-format";
const PUBLIC_LINK_SELECTOR: &str = "#public-link";
const ADMIN_LINK_SELECTOR: &str = "#admin-link";

/// Send one request and insist on HTTP 200.
pub(crate) async fn send_step(
    transport: &dyn HttpTransport,
    step: Step,
    request: FormRequest,
) -> Result<HttpResponse> {
    debug!("{}: POST {}", step, request.url);
    let response = transport.post_form(request).await?;
    if !response.is_ok() {
        return Err(ProtocolError::UnexpectedStatus {
            step,
            status: response.status,
        }
        .into());
    }
    Ok(response)
}

pub struct PollSession {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    date_format: Option<ServerDateFormat>,
}

impl PollSession {
    /// `base_url` must already be validated and carry no trailing slash.
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            date_format: None,
        }
    }

    /// Format discovered by [`PollSession::initiate`], if it has run
    pub fn date_format(&self) -> Option<&ServerDateFormat> {
        self.date_format.as_ref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn require_format(&self, step: Step) -> Result<&ServerDateFormat> {
        self.date_format
            .as_ref()
            .ok_or_else(|| ProtocolError::DateFormatUnknown(step).into())
    }

    /// Step 1: submit the poll metadata and read the server's date format.
    pub async fn initiate(&mut self, options: &PollOptions) -> Result<&ServerDateFormat> {
        let request = FormRequestBuilder::new(self.endpoint(form::CREATE_POLL_PATH))
            .fields(form::creation_fields(options))
            .build();
        let response = send_step(self.transport.as_ref(), Step::Initiate, request).await?;

        let hint = html::attribute(&response.body, DATE_FORMAT_SELECTOR, DATE_FORMAT_ATTRIBUTE)
            .ok_or_else(|| ProtocolError::MissingField {
                step: Step::Initiate,
                field: format!("{}[{}]", DATE_FORMAT_SELECTOR, DATE_FORMAT_ATTRIBUTE),
            })?;
        let format = ServerDateFormat::from_hint(&hint);
        debug!("Server date format is {} (hint '{}')", format, hint);

        Ok(&*self.date_format.insert(format))
    }

    /// Step 2: submit the offered days and times.
    pub async fn submit_schedule(&self, times: &[NaiveDateTime]) -> Result<()> {
        let format = self.require_format(Step::Schedule)?;
        let request = FormRequestBuilder::new(self.endpoint(form::CREATE_DATE_POLL_PATH))
            .fields(form::schedule_fields(times, format))
            .build();
        send_step(self.transport.as_ref(), Step::Schedule, request).await?;
        Ok(())
    }

    /// Step 3: confirm the poll and read its links.
    pub async fn finalize(&self, now: NaiveDateTime) -> Result<PollResult> {
        let format = self.require_format(Step::Finalize)?;
        let request = FormRequestBuilder::new(self.endpoint(form::CREATE_DATE_POLL_PATH))
            .fields(form::finalize_fields(now, format))
            .build();
        let response = send_step(self.transport.as_ref(), Step::Finalize, request).await?;

        let link = |selector: &str| {
            html::form_value(&response.body, selector).ok_or_else(|| ProtocolError::MissingField {
                step: Step::Finalize,
                field: selector.to_string(),
            })
        };
        Ok(PollResult {
            url: link(PUBLIC_LINK_SELECTOR)?,
            admin_url: link(ADMIN_LINK_SELECTOR)?,
        })
    }
}
