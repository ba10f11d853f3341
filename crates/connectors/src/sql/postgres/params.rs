use bigdecimal::{BigDecimal, ToPrimitive};
use bytes::BytesMut;
use model::core::value::Value;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::{error::Error, str::FromStr};
use tokio_postgres::types::{IsNull, Json, ToSql, Type, to_sql_checked};

pub type PgParam = Box<dyn ToSql + Sync + Send>;

/// Owned bind values for one statement.
pub struct PgParams(Vec<PgParam>);

impl PgParams {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values.into_iter().map(to_pg_param).collect())
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.0
            .iter()
            .map(|param| &**param as &(dyn ToSql + Sync))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn to_pg_param(value: Value) -> PgParam {
    match value {
        Value::Null => Box::new(Option::<String>::None),
        Value::Boolean(v) => Box::new(v),
        Value::Int(v) => Box::new(PgInt(v)),
        Value::Uint(v) => Box::new(PgInt(i64::try_from(v).unwrap_or(i64::MAX))),
        Value::Float(v) => Box::new(PgFloat(v)),
        Value::Decimal(v) => Box::new(to_decimal(&v)),
        Value::String(v) => Box::new(v),
        Value::Json(v) => Box::new(Json(v)),
        Value::Uuid(v) => Box::new(v),
        Value::Bytes(v) => Box::new(v),
        Value::Date(v) => Box::new(v),
        Value::Timestamp(v) => Box::new(v),
    }
}

/// `numeric` binds through `rust_decimal`; values outside its range lose
/// precision via `f64`.
fn to_decimal(value: &BigDecimal) -> Decimal {
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| value.to_f64().and_then(Decimal::from_f64_retain))
        .unwrap_or_default()
}

/// `i64` alone only binds to `int8`; this follows the width the server
/// inferred for the placeholder, including `numeric` columns.
#[derive(Debug)]
struct PgInt(i64);

impl ToSql for PgInt {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match *ty {
            Type::INT2 => i16::try_from(self.0)?.to_sql(ty, out),
            Type::INT4 => i32::try_from(self.0)?.to_sql(ty, out),
            Type::FLOAT4 => (self.0 as f32).to_sql(ty, out),
            Type::FLOAT8 => (self.0 as f64).to_sql(ty, out),
            Type::NUMERIC => Decimal::from(self.0).to_sql(ty, out),
            _ => self.0.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(
            *ty,
            Type::INT2 | Type::INT4 | Type::INT8 | Type::FLOAT4 | Type::FLOAT8 | Type::NUMERIC
        )
    }

    to_sql_checked!();
}

/// Float parameter for `float4`, `float8` and `numeric` placeholders.
#[derive(Debug)]
struct PgFloat(f64);

impl ToSql for PgFloat {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match *ty {
            Type::FLOAT4 => (self.0 as f32).to_sql(ty, out),
            Type::NUMERIC => Decimal::from_f64(self.0)
                .ok_or_else(|| format!("{} is not representable as numeric", self.0))?
                .to_sql(ty, out),
            _ => self.0.to_sql(ty, out),
        }
    }

    fn accepts(ty: &Type) -> bool {
        matches!(*ty, Type::FLOAT4 | Type::FLOAT8 | Type::NUMERIC)
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_follows_placeholder_width() {
        let mut out = BytesMut::new();
        PgInt(7).to_sql(&Type::INT4, &mut out).unwrap();
        assert_eq!(&out[..], &7i32.to_be_bytes());

        let mut out = BytesMut::new();
        assert!(PgInt(i64::from(i16::MAX) + 1).to_sql(&Type::INT2, &mut out).is_err());
        assert!(!PgInt::accepts(&Type::TEXT));
    }

    #[test]
    fn test_numbers_bind_to_numeric_columns() {
        let params = PgParams::new(vec![Value::Int(18), Value::Float(9.5)]);
        let refs = params.as_refs();

        let mut out = BytesMut::new();
        refs[0].to_sql_checked(&Type::NUMERIC, &mut out).unwrap();
        let mut want = BytesMut::new();
        Decimal::from(18).to_sql(&Type::NUMERIC, &mut want).unwrap();
        assert_eq!(out, want);

        let mut out = BytesMut::new();
        assert!(refs[1].to_sql_checked(&Type::NUMERIC, &mut out).is_ok());
        assert!(!out.is_empty());
    }

    #[test]
    fn test_float_follows_placeholder_width() {
        let mut out = BytesMut::new();
        PgFloat(1.5).to_sql(&Type::FLOAT4, &mut out).unwrap();
        assert_eq!(&out[..], &1.5f32.to_be_bytes());

        let mut out = BytesMut::new();
        assert!(PgFloat(f64::NAN).to_sql(&Type::NUMERIC, &mut out).is_err());
        assert!(!PgFloat::accepts(&Type::INT4));
    }

    #[test]
    fn test_decimal_conversion() {
        let value = BigDecimal::from_str("12.50").unwrap();
        assert_eq!(to_decimal(&value), Decimal::from_str("12.50").unwrap());
    }

    #[test]
    fn test_refs_match_values() {
        let params = PgParams::new(vec![Value::Int(1), Value::Null]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.as_refs().len(), 2);
        assert!(PgParams::new(Vec::new()).is_empty());
    }
}
