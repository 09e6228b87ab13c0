//! Day expressions: `"2020-01-01"`, `"mo-fr"`, `"sa,su"`

use chrono::{Days, NaiveDate};
use tracing::trace;

use super::error::ParseError;
use super::weekday::WeekdayTable;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of resolving a single day token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayResolution {
    Weekday(NaiveDate),
    ExplicitDate(NaiveDate),
    Unresolved,
}

impl DayResolution {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Weekday(date) | Self::ExplicitDate(date) => Some(date),
            Self::Unresolved => None,
        }
    }
}

fn parse_explicit_date(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, DATE_FORMAT).ok()
}

/// Resolve a token as a weekday first, then as an explicit date.
///
/// Only a recognised weekday that cannot be found within seven days is an
/// error; anything else that is not a date comes back as `Unresolved`.
pub fn resolve_day(
    token: &str,
    anchor: NaiveDate,
    table: &WeekdayTable,
) -> Result<DayResolution, ParseError> {
    let token = token.trim();
    if table.contains(token) {
        return table.next_occurrence(token, anchor).map(DayResolution::Weekday);
    }
    Ok(parse_explicit_date(token)
        .map(DayResolution::ExplicitDate)
        .unwrap_or(DayResolution::Unresolved))
}

fn resolve_required(
    token: &str,
    anchor: NaiveDate,
    table: &WeekdayTable,
) -> Result<NaiveDate, ParseError> {
    resolve_day(token, anchor, table)?
        .date()
        .ok_or_else(|| ParseError::InvalidDate(token.trim().to_string()))
}

fn is_day_token(token: &str, table: &WeekdayTable) -> bool {
    let token = token.trim();
    table.contains(token) || parse_explicit_date(token).is_some()
}

fn day_after(day: NaiveDate) -> Result<NaiveDate, ParseError> {
    day.checked_add_days(Days::new(1))
        .ok_or(ParseError::OutOfRange(day))
}

/// Split `left-right`, where either side may itself be a hyphenated date.
fn split_range<'e>(expr: &'e str, table: &WeekdayTable) -> Result<(&'e str, &'e str), ParseError> {
    let mut splits = expr
        .match_indices('-')
        .map(|(idx, _)| (&expr[..idx], &expr[idx + 1..]));

    if expr.matches('-').count() == 1 {
        return splits
            .next()
            .ok_or_else(|| ParseError::InvalidRange(expr.to_string()));
    }

    splits
        .find(|(left, right)| is_day_token(left, table) && is_day_token(right, table))
        .ok_or_else(|| ParseError::InvalidRange(expr.to_string()))
}

/// Parse a day expression into an ordered list of dates.
///
/// `today` anchors weekday tokens: the first weekday resolves to its next
/// occurrence starting tomorrow.
pub fn parse_day_range_expression(
    expr: &str,
    table: &WeekdayTable,
    today: NaiveDate,
) -> Result<Vec<NaiveDate>, ParseError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let default_anchor = day_after(today)?;

    if expr.contains(',') {
        // "mo,fr" is the next monday, then the friday after that
        let mut days = Vec::new();
        let mut anchor = default_anchor;
        for part in expr.split(',') {
            let day = resolve_required(part, anchor, table)?;
            anchor = day_after(day)?;
            days.push(day);
        }
        trace!("List expression '{}' resolved to {:?}", expr, days);
        Ok(days)
    } else if expr.contains('-') && parse_explicit_date(expr).is_none() {
        let (left, right) = split_range(expr, table)?;
        let start = resolve_required(left, default_anchor, table)?;
        let end = resolve_required(right, start, table)?;

        let days: Vec<NaiveDate> = start.iter_days().take_while(|day| *day < end).collect();
        if days.is_empty() {
            return Err(ParseError::EmptyRange {
                expr: expr.to_string(),
                start,
                end,
            });
        }
        trace!("Range expression '{}' resolved to {:?}", expr, days);
        Ok(days)
    } else {
        Ok(vec![resolve_required(expr, default_anchor, table)?])
    }
}
