//! Views for vehicles and users.

pub mod user;
pub mod vehicle;

pub use user::*;
pub use vehicle::*;

use crate::error::AppError;
use crate::model::Record;
use crate::router::PathParam;
use crate::sql::{BindValue, FieldKind};
use std::collections::HashMap;

/// First capture as a record id. Anything that cannot name a row is reported as `not_found`.
fn record_id(params: &[PathParam], not_found: &str) -> Result<i32, AppError> {
    params
        .first()
        .and_then(PathParam::as_int)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::NotFound(not_found.to_string()))
}

/// Query-string pairs as typed equality conditions for `Table::filter`.
/// Keys that are not fields of `T` are passed through untyped; the filter drops them.
fn query_conditions<'a, T: Record>(
    query: &'a HashMap<String, String>,
) -> Result<Vec<(&'a str, BindValue)>, AppError> {
    let mut conditions = Vec::with_capacity(query.len());
    for (key, raw) in query {
        let kind = T::FIELDS.iter().find(|f| f.name == key.as_str()).map(|f| f.kind);
        let value = match kind {
            Some(FieldKind::Id | FieldKind::Integer | FieldKind::ForeignKey) => raw
                .parse::<i32>()
                .map(|n| BindValue::Int(i64::from(n)))
                .map_err(|_| AppError::MalformedInput(format!("invalid value for {}", key)))?,
            Some(FieldKind::Decimal) => raw
                .parse::<f64>()
                .map(BindValue::Float)
                .map_err(|_| AppError::MalformedInput(format!("invalid value for {}", key)))?,
            _ => BindValue::Text(raw.clone()),
        };
        conditions.push((key.as_str(), value));
    }
    Ok(conditions)
}
