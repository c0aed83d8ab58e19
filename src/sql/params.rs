//! Values bound to generated statements. Converts from serde_json::Value.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value that can be bound to a PostgreSQL query.
///
/// Each variant reports its own parameter type, so one `Vec<BindValue>` binds
/// heterogeneous columns; placeholders carry an explicit cast to the column type.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl BindValue {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => BindValue::Null,
            Value::Bool(b) => BindValue::Text(b.to_string()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => BindValue::Int(i),
                None => BindValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => BindValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => BindValue::Text(v.to_string()),
        }
    }
}

impl From<i32> for BindValue {
    fn from(n: i32) -> Self {
        BindValue::Int(n.into())
    }
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::Int(n)
    }
}

impl From<f64> for BindValue {
    fn from(n: f64) -> Self {
        BindValue::Float(n)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

impl From<DateTime<Utc>> for BindValue {
    fn from(t: DateTime<Utc>) -> Self {
        BindValue::Timestamp(t)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(BindValue::Null)
    }
}

impl<'q> Encode<'q, Postgres> for BindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            BindValue::Null => Ok(IsNull::Yes),
            BindValue::Int(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf),
            BindValue::Float(n) => <f64 as Encode<Postgres>>::encode_by_ref(n, buf),
            BindValue::Text(s) => <&str as Encode<Postgres>>::encode_by_ref(&s.as_str(), buf),
            BindValue::Timestamp(t) => <DateTime<Utc> as Encode<Postgres>>::encode_by_ref(t, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            BindValue::Null | BindValue::Text(_) => <String as Type<Postgres>>::type_info(),
            BindValue::Int(_) => <i64 as Type<Postgres>>::type_info(),
            BindValue::Float(_) => <f64 as Type<Postgres>>::type_info(),
            BindValue::Timestamp(_) => <DateTime<Utc> as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for BindValue {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(_ty: &PgTypeInfo) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_keep_integer_precision() {
        assert_eq!(BindValue::from_json(&json!(100)), BindValue::Int(100));
        assert_eq!(BindValue::from_json(&json!(99.5)), BindValue::Float(99.5));
        assert_eq!(BindValue::from_json(&json!(null)), BindValue::Null);
        assert_eq!(BindValue::from_json(&json!("Corolla")), BindValue::Text("Corolla".into()));
    }

    #[test]
    fn optional_values_become_null() {
        assert_eq!(BindValue::from(None::<i32>), BindValue::Null);
        assert_eq!(BindValue::from(Some(7)), BindValue::Int(7));
    }
}
