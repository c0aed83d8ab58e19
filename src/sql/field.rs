//! Field descriptors: one per persisted column, declared once per record type.

/// Semantic column type. Drives the placeholder cast and the SELECT expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Id,
    Integer,
    Text,
    Decimal,
    Timestamp,
    ForeignKey,
}

impl FieldKind {
    /// PostgreSQL type used to cast bound parameters.
    pub fn pg_type(self) -> &'static str {
        match self {
            FieldKind::Id | FieldKind::Integer | FieldKind::ForeignKey => "integer",
            FieldKind::Text => "text",
            FieldKind::Decimal => "numeric",
            FieldKind::Timestamp => "timestamptz",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Client-writable. Server-assigned columns are never written regardless of this flag.
    pub writable: bool,
}

/// Columns the database assigns; excluded from every INSERT/UPDATE value list.
pub const SERVER_ASSIGNED: &[&str] = &["id", "created_at", "updated_at"];

impl Field {
    pub const fn writable(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            writable: true,
        }
    }

    pub const fn server(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            writable: false,
        }
    }

    pub fn is_written(&self) -> bool {
        self.writable && self.kind != FieldKind::Id && !SERVER_ASSIGNED.contains(&self.name)
    }
}
