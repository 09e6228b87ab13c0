//! Server-chosen date formats
//!
//! Framadate installations announce the date format they expect through a
//! day.js style hint (`DD/MM/YYYY`, `YYYY-MM-DD`, ...). Localised
//! installations may send a translated placeholder instead.

use chrono::NaiveDate;
use std::fmt;

/// Placeholders that are not plain day.js patterns.
const LOCALISED_PLACEHOLDERS: &[(&str, &str)] = &[("tt/mm/jjjj", "DD/MM/YYYY")];

/// Longest tokens first so `YYYY` wins over `YY`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDateFormat {
    pattern: String,
    strftime: String,
}

impl ServerDateFormat {
    /// Normalise the hint found in the creation page.
    pub fn from_hint(hint: &str) -> Self {
        let hint = hint.trim();
        let pattern = LOCALISED_PLACEHOLDERS
            .iter()
            .find(|(placeholder, _)| *placeholder == hint)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or_else(|| hint.to_uppercase());
        let strftime = to_strftime(&pattern);

        Self { pattern, strftime }
    }

    /// Normalised day.js pattern, e.g. `DD/MM/YYYY`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.strftime).to_string()
    }
}

impl fmt::Display for ServerDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    'scan: while !rest.is_empty() {
        for (token, spec) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some('%') => out.push_str("%%"),
            Some(ch) => out.push(ch),
            None => break,
        }
        rest = chars.as_str();
    }

    out
}
