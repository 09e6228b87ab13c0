//! Form payloads for each step of the workflow
//!
//! Field names and fixed values mirror the Framadate web forms and must not
//! change.

use chrono::{Months, NaiveDateTime};
use std::collections::BTreeMap;

use super::date_format::ServerDateFormat;
use super::types::PollOptions;

pub const CREATE_POLL_PATH: &str = "create_poll.php?type=date";
pub const CREATE_DATE_POLL_PATH: &str = "create_date_poll.php";

/// Settings every created poll gets: editable by anyone, one answer per
/// voter, no mail collection, unlimited choices, no password.
const CREATION_DEFAULTS: &[(&str, &str)] = &[
    ("ValueMax", ""),
    ("customized_url", ""),
    ("password", ""),
    ("password_repeat", ""),
    ("editable", "1"),
    ("responsetype", "0"),
    ("collect_users_mail", "0"),
    ("gotostep2", "date"),
];

const ADVANCE_FIELD: (&str, &str) = ("choixheures", "Weiter");
const CONFIRMATION_FIELD: (&str, &str) = ("confirmation", "confirmation");
const CONFIRM_DELETE_FIELD: (&str, &str) = ("confirm_delete_poll", "");

pub type Fields = Vec<(String, String)>;

fn owned<'a>(fields: &'a [(&'a str, &'a str)]) -> impl Iterator<Item = (String, String)> + 'a {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
}

pub fn creation_fields(options: &PollOptions) -> Fields {
    let mut fields = vec![
        ("name".to_string(), options.name.clone()),
        ("mail".to_string(), options.email.clone()),
        ("title".to_string(), options.title.clone()),
        (
            "description".to_string(),
            options.description.clone().unwrap_or_default(),
        ),
    ];
    fields.extend(owned(CREATION_DEFAULTS));
    fields
}

/// Date-times grouped by their rendering in the server format.
///
/// Keys iterate in lexicographic order; times keep their input order.
pub fn group_by_day(
    times: &[NaiveDateTime],
    format: &ServerDateFormat,
) -> BTreeMap<String, Vec<NaiveDateTime>> {
    let mut groups: BTreeMap<String, Vec<NaiveDateTime>> = BTreeMap::new();
    for time in times {
        groups
            .entry(format.format(time.date()))
            .or_default()
            .push(*time);
    }
    groups
}

/// `days[]` entries, each followed by its `horairesN[]` slots.
pub fn schedule_fields(times: &[NaiveDateTime], format: &ServerDateFormat) -> Fields {
    let mut fields = Fields::new();
    for (idx, (day, slots)) in group_by_day(times, format).into_iter().enumerate() {
        fields.push(("days[]".to_string(), day));
        let slot_name = format!("horaires{idx}[]");
        fields.extend(
            slots
                .iter()
                .map(|slot| (slot_name.clone(), slot.format("%H:%M").to_string())),
        );
    }
    fields.extend(owned(&[ADVANCE_FIELD]));
    fields
}

/// End date one calendar month after `now`, plus the confirmation flag.
pub fn finalize_fields(now: NaiveDateTime, format: &ServerDateFormat) -> Fields {
    let end = now.date().checked_add_months(Months::new(1)).unwrap_or(now.date());
    vec![
        ("enddate".to_string(), format.format(end)),
        (CONFIRMATION_FIELD.0.to_string(), CONFIRMATION_FIELD.1.to_string()),
    ]
}

pub fn delete_fields() -> Fields {
    owned(&[CONFIRM_DELETE_FIELD]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn names(fields: &Fields) -> Vec<&str> {
        fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_creation_fields() {
        let options = PollOptions::new("Ann", "Team dinner", "ann@example.org");
        let fields = creation_fields(&options);

        assert_eq!(field(&fields, "name"), Some("Ann"));
        assert_eq!(field(&fields, "mail"), Some("ann@example.org"));
        assert_eq!(field(&fields, "title"), Some("Team dinner"));
        assert_eq!(field(&fields, "description"), Some(""));
        assert_eq!(field(&fields, "editable"), Some("1"));
        assert_eq!(field(&fields, "responsetype"), Some("0"));
        assert_eq!(field(&fields, "collect_users_mail"), Some("0"));
        assert_eq!(field(&fields, "gotostep2"), Some("date"));
        assert_eq!(field(&fields, "ValueMax"), Some(""));
        assert_eq!(field(&fields, "password_repeat"), Some(""));
    }

    #[test]
    fn test_creation_fields_with_description() {
        let options = PollOptions::new("Ann", "Dinner", "ann@example.org")
            .with_description("Bring snacks");
        assert_eq!(field(&creation_fields(&options), "description"), Some("Bring snacks"));
    }

    #[test]
    fn test_schedule_groups_same_day() {
        let format = ServerDateFormat::from_hint("DD/MM/YYYY");
        let times = [at(2024, 3, 7, 18, 0), at(2024, 3, 7, 9, 30)];
        let fields = schedule_fields(&times, &format);

        assert_eq!(
            fields,
            vec![
                ("days[]".to_string(), "07/03/2024".to_string()),
                ("horaires0[]".to_string(), "18:00".to_string()),
                ("horaires0[]".to_string(), "09:30".to_string()),
                ("choixheures".to_string(), "Weiter".to_string()),
            ]
        );
    }

    #[test]
    fn test_schedule_sorts_days_lexicographically() {
        // 02/04 sorts before 10/03 as text even though it is later
        let format = ServerDateFormat::from_hint("DD/MM/YYYY");
        let times = [
            at(2024, 3, 10, 9, 0),
            at(2024, 4, 2, 14, 0),
            at(2024, 3, 10, 17, 0),
        ];
        let fields = schedule_fields(&times, &format);

        assert_eq!(
            names(&fields),
            vec!["days[]", "horaires0[]", "days[]", "horaires1[]", "horaires1[]", "choixheures"]
        );
        assert_eq!(fields[0].1, "02/04/2024");
        assert_eq!(fields[1].1, "14:00");
        assert_eq!(fields[2].1, "10/03/2024");
        assert_eq!(fields[3].1, "09:00");
        assert_eq!(fields[4].1, "17:00");
    }

    #[test]
    fn test_group_by_day_uses_rendered_key() {
        let format = ServerDateFormat::from_hint("YYYY-MM-DD");
        let groups = group_by_day(
            &[at(2024, 1, 2, 9, 0), at(2024, 1, 1, 9, 0), at(2024, 1, 2, 8, 0)],
            &format,
        );
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(groups["2024-01-02"], vec![at(2024, 1, 2, 9, 0), at(2024, 1, 2, 8, 0)]);
    }

    #[test]
    fn test_finalize_fields_end_one_month_later() {
        let format = ServerDateFormat::from_hint("DD/MM/YYYY");
        let fields = finalize_fields(at(2024, 1, 31, 12, 0), &format);
        assert_eq!(field(&fields, "enddate"), Some("29/02/2024"));
        assert_eq!(field(&fields, "confirmation"), Some("confirmation"));
    }

    #[test]
    fn test_delete_fields() {
        assert_eq!(
            delete_fields(),
            vec![("confirm_delete_poll".to_string(), String::new())]
        );
    }
}
