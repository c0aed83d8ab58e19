//! Record types: field-described entities mapped to one table each.

mod user;
mod vehicle;

pub use user::User;
pub use vehicle::Vehicle;

use crate::sql::{BindValue, Field};
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A row type the generic [`Table`](crate::service::Table) adapter can persist.
///
/// `FIELDS` is the ordered column list every generated statement is derived from;
/// rows come back through `FromRow` keyed by the same names.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    const TABLE: &'static str;
    const FIELDS: &'static [Field];

    /// Identity; `None` until the row has been inserted.
    fn id(&self) -> Option<i32>;

    /// Current in-memory value of a declared field.
    fn value(&self, field: &str) -> BindValue;
}
