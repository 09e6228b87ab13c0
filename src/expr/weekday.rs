//! Two-letter weekday abbreviations
//!
//! Weekday tokens are looked up in an explicit table instead of the host
//! locale, so the same expression resolves identically on every machine.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::error::ParseError;

/// Maps two-letter tokens to weekdays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayTable {
    entries: Vec<(String, Weekday)>,
}

impl WeekdayTable {
    /// Build a table from `(abbreviation, weekday)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Weekday)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(abbr, day)| (abbr.as_ref().to_lowercase(), day))
                .collect(),
        }
    }

    pub fn english() -> Self {
        Self::new([
            ("su", Weekday::Sun),
            ("mo", Weekday::Mon),
            ("tu", Weekday::Tue),
            ("we", Weekday::Wed),
            ("th", Weekday::Thu),
            ("fr", Weekday::Fri),
            ("sa", Weekday::Sat),
        ])
    }

    pub fn german() -> Self {
        Self::new([
            ("so", Weekday::Sun),
            ("mo", Weekday::Mon),
            ("di", Weekday::Tue),
            ("mi", Weekday::Wed),
            ("do", Weekday::Thu),
            ("fr", Weekday::Fri),
            ("sa", Weekday::Sat),
        ])
    }

    /// Table for a locale code such as `"en"` or `"de-DE"`.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match language.as_str() {
            "en" => Some(Self::english()),
            "de" => Some(Self::german()),
            _ => None,
        }
    }

    /// Whether `token` names a weekday in this table.
    pub fn contains(&self, token: &str) -> bool {
        self.entries
            .iter()
            .any(|(abbr, _)| abbr.eq_ignore_ascii_case(token))
    }

    /// Abbreviation used for `day`, if the table has one.
    pub fn abbreviation(&self, day: Weekday) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, d)| *d == day)
            .map(|(abbr, _)| abbr.as_str())
    }

    /// First date on or after `anchor` whose abbreviation matches `token`.
    ///
    /// Scans at most seven days, the anchor included.
    pub fn next_occurrence(&self, token: &str, anchor: NaiveDate) -> Result<NaiveDate, ParseError> {
        (0..7u64)
            .filter_map(|offset| anchor.checked_add_days(Days::new(offset)))
            .find(|day| {
                self.abbreviation(day.weekday())
                    .is_some_and(|abbr| abbr.eq_ignore_ascii_case(token))
            })
            .ok_or_else(|| ParseError::UnknownWeekday(token.to_string()))
    }
}

impl Default for WeekdayTable {
    fn default() -> Self {
        Self::english()
    }
}
