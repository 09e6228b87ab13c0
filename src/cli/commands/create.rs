//! Create command implementation
//!
//! Merges flags with the user configuration, expands the day and time
//! expressions, then drives the Framadate workflow.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::app::AppConfig;
use crate::config::DatepollConfig;
use crate::error::Error;
use crate::expr::ExpressionParser;
use crate::framadate::{FramadateClient, PollOptions};
use crate::transport::TransportManager;

/// Parameters of `datepoll create`
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    pub days: String,
    pub times: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub framadate: Option<String>,
    pub dry_run: bool,
}

/// A validated poll, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePlan {
    pub provider_url: Option<String>,
    pub options: PollOptions,
}

impl CreatePlan {
    pub fn require_provider(&self) -> crate::error::Result<&str> {
        self.provider_url
            .as_deref()
            .ok_or_else(|| Error::Validation("You need to specify a provider.".to_string()))
    }
}

fn required(value: Option<String>, fallback: Option<&String>, what: &str) -> crate::error::Result<String> {
    value
        .or_else(|| fallback.cloned())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Validation(format!("You must specify {what}.")))
}

/// Validate the parameters and expand the expressions.
///
/// Everything here happens before any request is sent.
pub fn plan_create(
    params: &CreateParams,
    config: &DatepollConfig,
    today: NaiveDate,
) -> crate::error::Result<CreatePlan> {
    let name = required(params.name.clone(), config.name.as_ref(), "a name")?;
    let title = required(params.title.clone(), None, "a title")?;
    let email = required(params.email.clone(), config.email.as_ref(), "an email")?;

    let parser = ExpressionParser::new(config.weekday_table()?).with_today(today);
    let times = parser.expand_to_date_times(&params.days, params.times.as_str())?;
    if times.is_empty() {
        return Err(Error::Validation(format!(
            "The times command '{}' does not contain any valid time.",
            params.times
        )));
    }
    debug!("Expanded '{}' x '{}' into {} date-times", params.days, params.times, times.len());

    let mut options = PollOptions::new(name, title, email).with_times(times);
    options.description = params.description.clone();

    Ok(CreatePlan {
        provider_url: params.framadate.clone().or_else(|| config.provider_url.clone()),
        options,
    })
}

/// Execute `datepoll create`
pub async fn run_create_command(params: CreateParams, app: &AppConfig) -> Result<()> {
    let config = DatepollConfig::load(app.config_path.as_deref())?;
    let plan = plan_create(&params, &config, Local::now().date_naive())?;

    if params.dry_run {
        for time in &plan.options.times {
            println!("{}", time.format("%Y-%m-%d %H:%M:%S"));
        }
        return Ok(());
    }

    let provider = plan.require_provider()?;
    let client = FramadateClient::new(TransportManager::production(config.timeout()));
    let result = client.create_poll(provider, &plan.options).await?;

    println!("Poll created!");
    println!("URL: {}", result.url);
    println!("Admin URL: {}", result.admin_url);
    Ok(())
}
