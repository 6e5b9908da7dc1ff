//! Display formatting of cell values.
//!
//! The grid hands each formatter the raw JSON value of a cell; the output is
//! the text shown in the cell. Sorting and filtering still operate on the raw
//! value, so nothing here needs to be reversible.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use serde_json::Value;

use crate::columns::ColumnKind;

const SKILLS_SHOWN: usize = 3;

pub fn format_value(kind: ColumnKind, value: &Value) -> String {
    match kind {
        ColumnKind::Selection => String::new(),
        ColumnKind::Status => format_status(is_truthy(value)),
        _ if value.is_null() => String::new(),
        ColumnKind::Currency => value.as_f64().map(format_currency).unwrap_or_default(),
        ColumnKind::Date => value.as_str().map(format_date).unwrap_or_default(),
        ColumnKind::Rating => value
            .as_f64()
            .map(|rating| format!("{rating:.1}"))
            .unwrap_or_default(),
        ColumnKind::Skills => value
            .as_array()
            .map(|skills| {
                let skills: Vec<&str> = skills.iter().filter_map(Value::as_str).collect();
                format_skills(&skills)
            })
            .unwrap_or_default(),
        ColumnKind::Text | ColumnKind::Number => match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
    }
}

/// US dollars without cents: `75000` becomes `$75,000`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_formatted_string(&Locale::en);
    if rounded < 0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// `2020-01-15` becomes `Jan 15, 2020`. Unparseable input is shown unchanged.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

pub fn format_status(active: bool) -> String {
    if active {
        "✓ Active".to_string()
    } else {
        "○ Inactive".to_string()
    }
}

pub fn format_skills(skills: &[&str]) -> String {
    if skills.len() <= SKILLS_SHOWN {
        return skills.join(", ");
    }
    format!(
        "{} +{} more",
        skills[..SKILLS_SHOWN].join(", "),
        skills.len() - SKILLS_SHOWN
    )
}

pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency_has_no_cents_and_groups_thousands() {
        assert_eq!(format_value(ColumnKind::Currency, &json!(75000)), "$75,000");
        assert_eq!(format_value(ColumnKind::Currency, &json!(199999.6)), "$200,000");
        assert_eq!(format_currency(-1200.0), "-$1,200");
        assert_eq!(format_value(ColumnKind::Currency, &Value::Null), "");
    }

    #[test]
    fn dates_use_short_month_names() {
        assert_eq!(format_value(ColumnKind::Date, &json!("2020-01-15")), "Jan 15, 2020");
        assert_eq!(format_value(ColumnKind::Date, &json!("2019-06-05")), "Jun 5, 2019");
        assert_eq!(format_value(ColumnKind::Date, &json!("soon")), "soon");
    }

    #[test]
    fn rating_keeps_one_decimal() {
        assert_eq!(format_value(ColumnKind::Rating, &json!(4)), "4.0");
        assert_eq!(format_value(ColumnKind::Rating, &json!(4.5)), "4.5");
    }

    #[test]
    fn status_treats_missing_as_inactive() {
        assert_eq!(format_value(ColumnKind::Status, &json!(true)), "✓ Active");
        assert_eq!(format_value(ColumnKind::Status, &json!(false)), "○ Inactive");
        assert_eq!(format_value(ColumnKind::Status, &Value::Null), "○ Inactive");
    }

    #[test]
    fn skills_collapse_after_three() {
        let three = json!(["Java", "Spring Boot", "MySQL"]);
        assert_eq!(format_value(ColumnKind::Skills, &three), "Java, Spring Boot, MySQL");

        let five = json!(["A", "B", "C", "D", "E"]);
        assert_eq!(format_value(ColumnKind::Skills, &five), "A, B, C +2 more");
        assert_eq!(format_value(ColumnKind::Skills, &json!("Java")), "");
    }

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(format_value(ColumnKind::Text, &json!("Denver")), "Denver");
        assert_eq!(format_value(ColumnKind::Number, &json!(42)), "42");
        assert_eq!(format_value(ColumnKind::Text, &Value::Null), "");
        assert_eq!(format_count(100000), "100,000");
    }
}
