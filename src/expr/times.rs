//! Time expressions: `"14"`, `"9:30"`, `"14:00,18:00"`

use chrono::NaiveTime;
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;
use tracing::debug;

static HOUR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}$").unwrap());
static HOUR_MINUTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{1,2}$").unwrap());
static HOUR_MINUTE_SECOND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{1,2}:\d{1,2}$").unwrap());

fn parse_time_part(part: &str) -> Option<NaiveTime> {
    let matched = HOUR.is_match(part)
        || HOUR_MINUTE.is_match(part)
        || HOUR_MINUTE_SECOND.is_match(part);
    if !matched {
        return None;
    }

    let mut fields = [0u32; 3];
    for (slot, value) in fields.iter_mut().zip(part.split(':')) {
        *slot = value.parse().ok()?;
    }
    let [hour, minute, second] = fields;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Parse a comma separated list of times.
///
/// The input is coerced to text first, so a bare integer is read as an hour.
/// Parts that are not exactly a valid `H`, `H:M` or `H:M:S` time are
/// dropped, including parts with surrounding whitespace.
pub fn parse_time_list_expression<E>(expr: &E) -> Vec<NaiveTime>
where
    E: Display + ?Sized,
{
    let expr = expr.to_string();
    expr.split(',')
        .filter_map(|part| {
            let time = parse_time_part(part);
            if time.is_none() {
                debug!("Ignoring unrecognised time '{}'", part);
            }
            time
        })
        .collect()
}
