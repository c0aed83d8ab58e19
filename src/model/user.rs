use crate::model::Record;
use crate::sql::{BindValue, Field, FieldKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Owner of at most one vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: Option<i32>,
    pub username: String,
    pub vehicle_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: impl Into<String>, vehicle_id: Option<i32>) -> Self {
        User {
            id: None,
            username: username.into(),
            vehicle_id,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const FIELDS: &'static [Field] = &[
        Field::server("id", FieldKind::Id),
        Field::writable("username", FieldKind::Text),
        Field::writable("vehicle_id", FieldKind::ForeignKey),
        Field::server("created_at", FieldKind::Timestamp),
        Field::server("updated_at", FieldKind::Timestamp),
    ];

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn value(&self, field: &str) -> BindValue {
        match field {
            "id" => self.id.into(),
            "username" => self.username.as_str().into(),
            "vehicle_id" => self.vehicle_id.into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => BindValue::Null,
        }
    }
}
