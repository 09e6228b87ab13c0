//! Day and time expressions
//!
//! Turns compact expressions such as `"mo-fr"` and `"14:00,18:00"` into the
//! ordered date-times offered in a poll.
//!
//! ```
//! use chrono::NaiveDate;
//! use datepoll::expr::ExpressionParser;
//!
//! let parser = ExpressionParser::default()
//!     .with_today(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
//! let slots = parser.expand_to_date_times("2024-01-10,2024-01-12", "9,14:30").unwrap();
//! assert_eq!(slots.len(), 4);
//! assert_eq!(slots[1].to_string(), "2024-01-10 14:30:00");
//! ```

pub mod days;
pub mod error;
pub mod times;
pub mod weekday;

pub use days::{parse_day_range_expression, resolve_day, DayResolution};
pub use error::ParseError;
pub use times::parse_time_list_expression;
pub use weekday::WeekdayTable;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Display;

/// Parses expressions against a weekday table and a reference "today".
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    table: WeekdayTable,
    today: NaiveDate,
}

impl ExpressionParser {
    /// Create a parser anchored on the host's current date
    pub fn new(table: WeekdayTable) -> Self {
        Self {
            table,
            today: Local::now().date_naive(),
        }
    }

    /// Anchor weekday resolution on a fixed date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn parse_day_range_expression(&self, expr: &str) -> Result<Vec<NaiveDate>, ParseError> {
        parse_day_range_expression(expr, &self.table, self.today)
    }

    pub fn parse_time_list_expression<E>(&self, expr: &E) -> Vec<NaiveTime>
    where
        E: Display + ?Sized,
    {
        parse_time_list_expression(expr)
    }

    /// Every parsed day combined with every parsed time, days first.
    pub fn expand_to_date_times<E>(
        &self,
        day_expr: &str,
        time_expr: &E,
    ) -> Result<Vec<NaiveDateTime>, ParseError>
    where
        E: Display + ?Sized,
    {
        let days = self.parse_day_range_expression(day_expr)?;
        let times = self.parse_time_list_expression(time_expr);

        Ok(days
            .iter()
            .flat_map(|day| times.iter().map(move |time| day.and_time(*time)))
            .collect())
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new(WeekdayTable::default())
    }
}
