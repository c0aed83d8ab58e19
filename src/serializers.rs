//! Request payloads: only the client-writable fields of each record are accepted.

use crate::error::AppError;
use crate::model::{User, Vehicle};
use crate::view::ApiRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decode the request body into a payload. Unknown keys are ignored.
pub fn payload<T: DeserializeOwned>(req: &ApiRequest) -> Result<T, AppError> {
    let body = req
        .body
        .clone()
        .ok_or_else(|| AppError::MalformedInput("Request body required".into()))?;
    serde_json::from_value(body).map_err(|e| AppError::MalformedInput(e.to_string()))
}

/// Distinguishes an explicit `null` (Some(None)) from an absent key (None).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::MalformedInput(format!("{} is required", field)))
}

#[derive(Debug, Default, Deserialize)]
pub struct VehiclePayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub rent_rate: Option<f64>,
}

impl VehiclePayload {
    pub fn into_vehicle(self) -> Result<Vehicle, AppError> {
        Ok(Vehicle::new(
            required(self.name, "name")?,
            required(self.model, "model")?,
            required(self.rent_rate, "rent_rate")?,
        ))
    }

    /// Overwrite the fields present in the payload.
    pub fn apply(self, vehicle: &mut Vehicle) {
        if let Some(name) = self.name {
            vehicle.name = name;
        }
        if let Some(model) = self.model {
            vehicle.model = model;
        }
        if let Some(rent_rate) = self.rent_rate {
            vehicle.rent_rate = rent_rate;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub vehicle_id: Option<Option<i32>>,
}

impl UserPayload {
    pub fn into_user(self) -> Result<User, AppError> {
        Ok(User::new(
            required(self.username, "username")?,
            self.vehicle_id.flatten(),
        ))
    }

    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(vehicle_id) = self.vehicle_id {
            user.vehicle_id = vehicle_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn request(body: Option<Value>) -> ApiRequest {
        ApiRequest {
            method: Method::POST,
            path: "/api/vehicles/create".into(),
            query: HashMap::new(),
            headers: HeaderMap::new(),
            body,
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let p: VehiclePayload = payload(&request(Some(json!({
            "name": "Toyota", "model": "Corolla", "rent_rate": 100, "id": 99, "created_at": "x"
        }))))
        .unwrap();
        let v = p.into_vehicle().unwrap();
        assert_eq!(v.id, None);
        assert_eq!(v.name, "Toyota");
        assert_eq!(v.rent_rate, 100.0);
    }

    #[test]
    fn missing_body_is_rejected() {
        let err = payload::<VehiclePayload>(&request(None)).unwrap_err();
        assert_eq!(err.to_string(), "Request body required");
    }

    #[test]
    fn wrong_type_is_malformed_input() {
        let err = payload::<VehiclePayload>(&request(Some(json!({ "rent_rate": "cheap" })))).unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn create_requires_every_field() {
        let p: VehiclePayload = payload(&request(Some(json!({ "name": "Toyota" })))).unwrap();
        assert_eq!(p.into_vehicle().unwrap_err().to_string(), "model is required");
    }

    #[test]
    fn explicit_null_clears_vehicle() {
        let mut user = User::new("bishok", Some(4));
        let p: UserPayload = payload(&request(Some(json!({ "vehicle_id": null })))).unwrap();
        p.apply(&mut user);
        assert_eq!(user.vehicle_id, None);
        assert_eq!(user.username, "bishok");
    }

    #[test]
    fn absent_vehicle_is_kept() {
        let mut user = User::new("bishok", Some(4));
        let p: UserPayload = payload(&request(Some(json!({ "username": "kiran" })))).unwrap();
        p.apply(&mut user);
        assert_eq!(user.vehicle_id, Some(4));
        assert_eq!(user.username, "kiran");
    }
}
