use bigdecimal::BigDecimal;
use core::fmt;
use model::{
    core::value::{FieldValue, Value},
    records::row::RowData,
};
use mysql_async::{Row as MySqlRow, Value as MySqlValue, consts::ColumnType};
use std::{fmt::Formatter, str::FromStr};
use tokio_postgres::{Row as PgRow, types::Json as PgJson};
use tracing::warn;

// MySQL collation id of the `binary` character set
const MYSQL_BINARY_CHARSET: u16 = 63;

pub enum DbRow<'a> {
    MySqlRow(&'a MySqlRow),
    PostgresRow(&'a PgRow),
}

impl DbRow<'_> {
    pub fn to_row_data(&self, table: &str) -> RowData {
        let columns = self
            .columns()
            .into_iter()
            .enumerate()
            .map(|(idx, name)| FieldValue {
                value: self.get_value(idx, &name),
                name,
            })
            .collect();

        RowData::new(table, columns)
    }

    pub fn columns(&self) -> Vec<String> {
        match self {
            DbRow::MySqlRow(row) => row
                .columns_ref()
                .iter()
                .map(|col| col.name_str().into_owned())
                .collect(),
            DbRow::PostgresRow(row) => row
                .columns()
                .iter()
                .map(|col| col.name().to_string())
                .collect(),
        }
    }

    /// Decodes the value at `idx`; `None` means SQL NULL.
    pub fn get_value(&self, idx: usize, name: &str) -> Option<Value> {
        match self {
            DbRow::MySqlRow(row) => mysql_value(row, idx),
            DbRow::PostgresRow(row) => pg_value(row, idx, name),
        }
    }
}

fn pg_value(row: &PgRow, idx: usize, name: &str) -> Option<Value> {
    let type_name = row.columns()[idx].type_().name();

    match type_name {
        "bool" => pg_get::<bool>(row, idx).map(Value::Boolean),
        "int2" => pg_get::<i16>(row, idx).map(|v| Value::Int(v as i64)),
        "int4" => pg_get::<i32>(row, idx).map(|v| Value::Int(v as i64)),
        "int8" => pg_get::<i64>(row, idx).map(Value::Int),
        "float4" => pg_get::<f32>(row, idx).map(|v| Value::Float(v as f64)),
        "float8" => pg_get::<f64>(row, idx).map(Value::Float),
        "numeric" => pg_get::<rust_decimal::Decimal>(row, idx)
            .and_then(|d| BigDecimal::from_str(&d.to_string()).ok())
            .map(Value::Decimal),
        "date" => pg_get::<chrono::NaiveDate>(row, idx).map(Value::Date),
        "timestamp" => pg_get::<chrono::NaiveDateTime>(row, idx)
            .map(|naive| Value::Timestamp(naive.and_utc())),
        "timestamptz" => pg_get::<chrono::DateTime<chrono::Utc>>(row, idx).map(Value::Timestamp),
        "uuid" => pg_get::<uuid::Uuid>(row, idx).map(Value::Uuid),
        "json" | "jsonb" => pg_get::<PgJson<serde_json::Value>>(row, idx).map(|j| Value::Json(j.0)),
        "bytea" => pg_get::<Vec<u8>>(row, idx).map(Value::Bytes),
        _ => match row.try_get::<_, Option<String>>(idx) {
            Ok(v) => v.map(Value::String),
            Err(err) => {
                warn!(column = name, type_name, %err, "Unsupported column type, returning NULL");
                None
            }
        },
    }
}

fn pg_get<'a, T>(row: &'a PgRow, idx: usize) -> Option<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get::<_, Option<T>>(idx).ok().flatten()
}

fn mysql_value(row: &MySqlRow, idx: usize) -> Option<Value> {
    let column = &row.columns_ref()[idx];

    match row.as_ref(idx)? {
        MySqlValue::NULL => None,
        MySqlValue::Int(i) => Some(Value::Int(*i)),
        MySqlValue::UInt(u) => Some(Value::Uint(*u)),
        MySqlValue::Float(f) => Some(Value::Float(*f as f64)),
        MySqlValue::Double(d) => Some(Value::Float(*d)),
        MySqlValue::Bytes(bytes) => Some(match column.column_type() {
            ColumnType::MYSQL_TYPE_NEWDECIMAL | ColumnType::MYSQL_TYPE_DECIMAL => {
                let text = String::from_utf8_lossy(bytes);
                BigDecimal::from_str(&text)
                    .map(Value::Decimal)
                    .unwrap_or_else(|_| Value::String(text.into_owned()))
            }
            _ if column.character_set() == MYSQL_BINARY_CHARSET => Value::Bytes(bytes.clone()),
            _ => match String::from_utf8(bytes.clone()) {
                Ok(s) => Value::String(s),
                Err(_) => Value::Bytes(bytes.clone()),
            },
        }),
        MySqlValue::Date(y, m, d, h, mi, s, us) => {
            let date = chrono::NaiveDate::from_ymd_opt(*y as i32, *m as u32, *d as u32)?;
            if column.column_type() == ColumnType::MYSQL_TYPE_DATE {
                Some(Value::Date(date))
            } else {
                date.and_hms_micro_opt(*h as u32, *mi as u32, *s as u32, *us)
                    .map(|naive| Value::Timestamp(naive.and_utc()))
            }
        }
        MySqlValue::Time(neg, days, h, mi, s, us) => {
            let sign = if *neg { "-" } else { "" };
            let hours = *days * 24 + *h as u32;
            Some(Value::String(format!(
                "{sign}{hours:02}:{mi:02}:{s:02}.{us:06}"
            )))
        }
    }
}

impl fmt::Debug for DbRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DbRow::MySqlRow(row) => write!(f, "{row:?}"),
            DbRow::PostgresRow(row) => write!(f, "{row:?}"),
        }
    }
}
