//! Framadate poll workflow
//!
//! Framadate has no API, so polls are created by replaying its web forms:
//!
//! 1. submit the poll metadata, which also reveals the server's date format
//! 2. submit the offered days and times, rendered in that format
//! 3. confirm the poll and read the public and admin links
//!
//! All three requests travel in one cookie session. Any non-200 answer
//! aborts the sequence; nothing is retried or rolled back.

pub mod date_format;
pub mod error;
pub mod form;
pub mod html;
pub mod session;
pub mod types;

pub use date_format::ServerDateFormat;
pub use error::{ProtocolError, Step};
pub use session::PollSession;
pub use types::{PollOptions, PollResult};

use chrono::{Local, NaiveDateTime};
use tracing::info;
use url::Url;

use crate::error::Result;
use crate::transport::{FormRequestBuilder, TransportManager};

/// Validate a provider URL and strip its trailing slash.
pub fn normalize_base_url(base_url: &str) -> std::result::Result<String, ProtocolError> {
    let invalid = |reason: String| ProtocolError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };
    let parsed = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings are not supported".to_string()));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[derive(Clone, Default)]
pub struct FramadateClient {
    transport: TransportManager,
}

impl FramadateClient {
    pub fn new(transport: TransportManager) -> Self {
        Self { transport }
    }

    /// Create a poll, ending one month from the current local time.
    pub async fn create_poll(&self, base_url: &str, options: &PollOptions) -> Result<PollResult> {
        self.create_poll_at(base_url, options, Local::now().naive_local())
            .await
    }

    /// Create a poll with an explicit "now" for the end date.
    pub async fn create_poll_at(
        &self,
        base_url: &str,
        options: &PollOptions,
        now: NaiveDateTime,
    ) -> Result<PollResult> {
        let base_url = normalize_base_url(base_url)?;
        let mut session = PollSession::new(self.transport.open_session()?, base_url.as_str());

        session.initiate(options).await?;
        session.submit_schedule(&options.times).await?;
        let result = session.finalize(now).await?;

        info!("Created poll '{}' at {}", options.title, result.url);
        Ok(result)
    }

    /// Delete a poll through its admin URL.
    ///
    /// The admin URL is the only credential needed, so this runs in a
    /// fresh session of its own.
    pub async fn delete_poll(&self, admin_url: &str) -> Result<()> {
        let transport = self.transport.open_session()?;
        let request = FormRequestBuilder::new(admin_url)
            .fields(form::delete_fields())
            .build();
        session::send_step(transport.as_ref(), Step::Delete, request).await?;

        info!("Deleted poll at {}", admin_url);
        Ok(())
    }
}
