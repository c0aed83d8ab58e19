//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a record's field descriptors.

use crate::model::Record;
use crate::sql::{BindValue, Field, FieldKind};

/// Quote identifier for PostgreSQL (safe: only from field descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    /// Push a value and return its typed placeholder, e.g. `$2::numeric`.
    fn push_param(&mut self, v: BindValue, kind: FieldKind) -> String {
        self.params.push(v);
        format!("${}::{}", self.params.len(), kind.pg_type())
    }
}

fn id_column(fields: &[Field]) -> &'static str {
    fields
        .iter()
        .find(|f| f.kind == FieldKind::Id)
        .map(|f| f.name)
        .unwrap_or("id")
}

/// SELECT/RETURNING list in declaration order. Numeric is read back as float8.
fn select_column_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| {
            let q = quoted(f.name);
            match f.kind {
                FieldKind::Decimal => format!("{}::float8 AS {}", q, q),
                _ => q,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by id.
pub fn select_all<T: Record>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(T::FIELDS),
        quoted(T::TABLE),
        quoted(id_column(T::FIELDS))
    );
    q
}

pub fn select_by_id<T: Record>(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(id.into(), FieldKind::Id);
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        select_column_list(T::FIELDS),
        quoted(T::TABLE),
        quoted(id_column(T::FIELDS)),
        ph
    );
    q
}

/// SELECT with `field = value AND ...` for conditions naming a declared field.
/// Unknown fields are dropped; returns None when nothing recognized is left.
pub fn select_where<T: Record>(conditions: &[(&str, BindValue)]) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (name, val) in conditions {
        let Some(field) = T::FIELDS.iter().find(|f| f.name == *name) else {
            continue;
        };
        let ph = q.push_param(val.clone(), field.kind);
        where_parts.push(format!("{} = {}", quoted(field.name), ph));
    }
    if where_parts.is_empty() {
        return None;
    }
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} ORDER BY {}",
        select_column_list(T::FIELDS),
        quoted(T::TABLE),
        where_parts.join(" AND "),
        quoted(id_column(T::FIELDS))
    );
    Some(q)
}

/// INSERT of every written field, RETURNING the full column list.
pub fn insert<T: Record>(record: &T) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for f in T::FIELDS.iter().filter(|f| f.is_written()) {
        cols.push(quoted(f.name));
        placeholders.push(q.push_param(record.value(f.name), f.kind));
    }
    let returning = select_column_list(T::FIELDS);
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", quoted(T::TABLE), returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            quoted(T::TABLE),
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// UPDATE of every written field by id; bumps updated_at when the record declares it.
pub fn update<T: Record>(record: &T, id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let id_col = id_column(T::FIELDS);
    let mut sets = Vec::new();
    for f in T::FIELDS.iter().filter(|f| f.is_written()) {
        let ph = q.push_param(record.value(f.name), f.kind);
        sets.push(format!("{} = {}", quoted(f.name), ph));
    }
    if T::FIELDS.iter().any(|f| f.name == "updated_at") {
        sets.push(format!("{} = NOW()", quoted("updated_at")));
    }
    if sets.is_empty() {
        sets.push(format!("{} = {}", quoted(id_col), quoted(id_col)));
    }
    let id_ph = q.push_param(id.into(), FieldKind::Id);
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {} RETURNING {}",
        quoted(T::TABLE),
        sets.join(", "),
        quoted(id_col),
        id_ph,
        select_column_list(T::FIELDS)
    );
    q
}

/// DELETE by id; callers inspect the affected-row count.
pub fn delete_by_id<T: Record>(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let id_col = id_column(T::FIELDS);
    let ph = q.push_param(id.into(), FieldKind::Id);
    q.sql = format!("DELETE FROM {} WHERE {} = {}", quoted(T::TABLE), quoted(id_col), ph);
    q
}

/// DELETE by id RETURNING the id, so a removed row is observable as a returned row.
pub fn delete_by_id_returning<T: Record>(id: i32) -> QueryBuf {
    let mut q = delete_by_id::<T>(id);
    q.sql.push_str(&format!(" RETURNING {}", quoted(id_column(T::FIELDS))));
    q
}
