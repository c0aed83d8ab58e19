use crate::model::Record;
use crate::sql::{BindValue, Field, FieldKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: Option<i32>,
    pub name: String,
    pub model: String,
    pub rent_rate: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, model: impl Into<String>, rent_rate: f64) -> Self {
        Vehicle {
            id: None,
            name: name.into(),
            model: model.into(),
            rent_rate,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Record for Vehicle {
    const TABLE: &'static str = "vehicles";
    const FIELDS: &'static [Field] = &[
        Field::server("id", FieldKind::Id),
        Field::writable("name", FieldKind::Text),
        Field::writable("model", FieldKind::Text),
        Field::writable("rent_rate", FieldKind::Decimal),
        Field::server("created_at", FieldKind::Timestamp),
        Field::server("updated_at", FieldKind::Timestamp),
    ];

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn value(&self, field: &str) -> BindValue {
        match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "model" => self.model.as_str().into(),
            "rent_rate" => self.rent_rate.into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => BindValue::Null,
        }
    }
}
