use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Everything needed to create one poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOptions {
    pub name: String,
    pub title: String,
    pub email: String,
    pub description: Option<String>,
    /// Offered slots, in the order they were expanded
    pub times: Vec<NaiveDateTime>,
}

impl PollOptions {
    pub fn new(name: impl Into<String>, title: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            description: None,
            times: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_times(mut self, times: Vec<NaiveDateTime>) -> Self {
        self.times = times;
        self
    }
}

/// Links to a created poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollResult {
    pub url: String,
    pub admin_url: String,
}
