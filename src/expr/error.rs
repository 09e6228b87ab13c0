use thiserror::Error;

/// Errors raised while parsing a day expression.
///
/// Time expressions never fail: parts that do not match a time pattern are
/// dropped instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Day expression is empty")]
    EmptyExpression,

    #[error("Could not find weekday '{0}' within seven days")]
    UnknownWeekday(String),

    #[error("'{0}' is neither a weekday nor a valid date (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Could not split '{0}' into two days")]
    InvalidRange(String),

    #[error("No day follows {0}")]
    OutOfRange(chrono::NaiveDate),

    #[error("Range '{expr}' is empty: {end} is not after {start}")]
    EmptyRange {
        expr: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}
