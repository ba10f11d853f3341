use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use model::core::value::Value;
use mysql_async::Value as MySqlValue;
use mysql_common::params::Params;

/// Positional parameters for `exec`; statements without placeholders get
/// `Params::Empty` so the server is not sent an empty bind list.
pub fn bind_params(values: &[Value]) -> Params {
    if values.is_empty() {
        Params::Empty
    } else {
        Params::Positional(values.iter().map(to_mysql_value).collect())
    }
}

fn to_mysql_value(value: &Value) -> MySqlValue {
    match value {
        Value::Null => MySqlValue::NULL,
        Value::Boolean(b) => MySqlValue::Int(i64::from(*b)),
        Value::Int(i) => MySqlValue::Int(*i),
        Value::Uint(u) => MySqlValue::UInt(*u),
        Value::Float(f) => MySqlValue::Double(*f),
        Value::Bytes(b) => MySqlValue::Bytes(b.clone()),
        Value::Date(d) => date_time(d, None),
        Value::Timestamp(ts) => date_time(&ts.date_naive(), Some(ts.naive_utc())),
        // Textual forms let the server coerce to the column type.
        Value::String(s) => text(s),
        Value::Decimal(d) => text(&d.to_string()),
        Value::Json(j) => text(&j.to_string()),
        Value::Uuid(u) => text(&u.to_string()),
    }
}

fn text(s: &str) -> MySqlValue {
    MySqlValue::Bytes(s.as_bytes().to_vec())
}

fn date_time(date: &NaiveDate, time: Option<NaiveDateTime>) -> MySqlValue {
    let (hour, minute, second, micros) = time
        .map(|t| {
            (
                t.hour() as u8,
                t.minute() as u8,
                t.second() as u8,
                t.and_utc().timestamp_subsec_micros(),
            )
        })
        .unwrap_or_default();

    MySqlValue::Date(
        date.year() as u16,
        date.month() as u8,
        date.day() as u8,
        hour,
        minute,
        second,
        micros,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_no_values_binds_nothing() {
        assert_eq!(bind_params(&[]), Params::Empty);
    }

    #[test]
    fn test_values_bind_positionally() {
        let params = bind_params(&[
            Value::String("%Ed%".to_string()),
            Value::Boolean(true),
            Value::Null,
        ]);
        assert_eq!(
            params,
            Params::Positional(vec![
                MySqlValue::Bytes(b"%Ed%".to_vec()),
                MySqlValue::Int(1),
                MySqlValue::NULL,
            ])
        );
    }

    #[test]
    fn test_timestamp_keeps_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 30).unwrap();
        assert_eq!(
            to_mysql_value(&Value::Timestamp(ts)),
            MySqlValue::Date(2024, 3, 9, 14, 5, 30, 0)
        );
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            to_mysql_value(&Value::Date(date)),
            MySqlValue::Date(2024, 3, 9, 0, 0, 0, 0)
        );
    }
}
