//! Vehicle views: list, create, retrieve, update, delete.

use super::{query_conditions, record_id};
use crate::error::AppError;
use crate::model::Vehicle;
use crate::response::{success_created, success_ok};
use crate::router::PathParam;
use crate::serializers::{payload, VehiclePayload};
use crate::service::Table;
use crate::state::AppState;
use crate::view::{ApiRequest, Verb, View, ViewResult};
use async_trait::async_trait;
use serde_json::json;

const NOT_FOUND: &str = "Vehicle not found";

fn vehicles(state: &AppState) -> Table<Vehicle> {
    Table::new(state.pool.clone())
}

/// GET /api/vehicles; query-string pairs narrow the list to exact matches.
pub struct VehicleListView {
    vehicles: Table<Vehicle>,
}

impl VehicleListView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(VehicleListView {
            vehicles: vehicles(state),
        })
    }
}

#[async_trait]
impl View for VehicleListView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Get]
    }

    async fn get(&self, req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        let rows = if req.query.is_empty() {
            self.vehicles.list_all().await?
        } else {
            let conditions = query_conditions::<Vehicle>(&req.query)?;
            self.vehicles.filter(&conditions).await?
        };
        Ok(success_ok(rows, "Vehicles fetched successfully"))
    }
}

/// POST /api/vehicles/create
pub struct VehicleCreateView {
    vehicles: Table<Vehicle>,
}

impl VehicleCreateView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(VehicleCreateView {
            vehicles: vehicles(state),
        })
    }
}

#[async_trait]
impl View for VehicleCreateView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Post]
    }

    async fn post(&self, req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        let mut vehicle = payload::<VehiclePayload>(req)?.into_vehicle()?;
        self.vehicles.insert(&mut vehicle).await?;
        Ok(success_created(json!({ "id": vehicle.id }), "Vehicle created"))
    }
}

/// GET /api/vehicles/{id}
pub struct VehicleRetrieveView {
    vehicles: Table<Vehicle>,
}

impl VehicleRetrieveView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(VehicleRetrieveView {
            vehicles: vehicles(state),
        })
    }
}

#[async_trait]
impl View for VehicleRetrieveView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Get]
    }

    async fn get(&self, _req: &ApiRequest, params: &[PathParam]) -> ViewResult {
        let id = record_id(params, NOT_FOUND)?;
        let vehicle = self
            .vehicles
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        Ok(success_ok(vehicle, "Vehicle retrieved successfully"))
    }
}

/// PUT /api/vehicles/{id}/update. Partial: absent fields keep their stored value.
pub struct VehicleUpdateView {
    vehicles: Table<Vehicle>,
}

impl VehicleUpdateView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(VehicleUpdateView {
            vehicles: vehicles(state),
        })
    }
}

#[async_trait]
impl View for VehicleUpdateView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Put]
    }

    async fn put(&self, req: &ApiRequest, params: &[PathParam]) -> ViewResult {
        let id = record_id(params, NOT_FOUND)?;
        let changes = payload::<VehiclePayload>(req)?;
        let mut vehicle = self
            .vehicles
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        changes.apply(&mut vehicle);
        if !self.vehicles.save(&mut vehicle).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(success_ok(vehicle, "Vehicle updated"))
    }
}

/// DELETE /api/vehicles/{id}/delete
pub struct VehicleDeleteView {
    vehicles: Table<Vehicle>,
}

impl VehicleDeleteView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(VehicleDeleteView {
            vehicles: vehicles(state),
        })
    }
}

#[async_trait]
impl View for VehicleDeleteView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Delete]
    }

    async fn delete(&self, _req: &ApiRequest, params: &[PathParam]) -> ViewResult {
        let id = record_id(params, NOT_FOUND)?;
        if !self.vehicles.delete_by_id(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(success_ok(json!({ "id": id }), "Vehicle deleted"))
    }
}
