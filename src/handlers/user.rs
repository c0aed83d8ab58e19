//! User views: list, create, retrieve, update, delete.

use super::{query_conditions, record_id};
use crate::error::AppError;
use crate::model::User;
use crate::response::{success_created, success_ok};
use crate::router::PathParam;
use crate::serializers::{payload, UserPayload};
use crate::service::Table;
use crate::state::AppState;
use crate::view::{ApiRequest, Verb, View, ViewResult};
use async_trait::async_trait;
use serde_json::json;

const NOT_FOUND: &str = "User not found";

fn users(state: &AppState) -> Table<User> {
    Table::new(state.pool.clone())
}

/// GET /api/users; query-string pairs narrow the list to exact matches.
pub struct UserListView {
    users: Table<User>,
}

impl UserListView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(UserListView {
            users: users(state),
        })
    }
}

#[async_trait]
impl View for UserListView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Get]
    }

    async fn get(&self, req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        let rows = if req.query.is_empty() {
            self.users.list_all().await?
        } else {
            let conditions = query_conditions::<User>(&req.query)?;
            self.users.filter(&conditions).await?
        };
        Ok(success_ok(rows, "Users fetched successfully"))
    }
}

/// POST /api/users/create
pub struct UserCreateView {
    users: Table<User>,
}

impl UserCreateView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(UserCreateView {
            users: users(state),
        })
    }
}

#[async_trait]
impl View for UserCreateView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Post]
    }

    async fn post(&self, req: &ApiRequest, _params: &[PathParam]) -> ViewResult {
        let mut user = payload::<UserPayload>(req)?.into_user()?;
        self.users.insert(&mut user).await?;
        Ok(success_created(json!({ "id": user.id }), "User created"))
    }
}

/// GET /api/users/{id}
pub struct UserRetrieveView {
    users: Table<User>,
}

impl UserRetrieveView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(UserRetrieveView {
            users: users(state),
        })
    }
}

#[async_trait]
impl View for UserRetrieveView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Get]
    }

    async fn get(&self, _req: &ApiRequest, params: &[PathParam]) -> ViewResult {
        let id = record_id(params, NOT_FOUND)?;
        let user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        Ok(success_ok(user, "User retrieved successfully"))
    }
}

/// PUT /api/users/{id}/update. Partial: absent fields keep their stored value.
pub struct UserUpdateView {
    users: Table<User>,
}

impl UserUpdateView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(UserUpdateView {
            users: users(state),
        })
    }
}

#[async_trait]
impl View for UserUpdateView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Put]
    }

    async fn put(&self, req: &ApiRequest, params: &[PathParam]) -> ViewResult {
        let id = record_id(params, NOT_FOUND)?;
        let changes = payload::<UserPayload>(req)?;
        let mut user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        changes.apply(&mut user);
        if !self.users.save(&mut user).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(success_ok(user, "User updated"))
    }
}

/// DELETE /api/users/{id}/delete
pub struct UserDeleteView {
    users: Table<User>,
}

impl UserDeleteView {
    pub fn build(state: &AppState) -> Box<dyn View> {
        Box::new(UserDeleteView {
            users: users(state),
        })
    }
}

#[async_trait]
impl View for UserDeleteView {
    fn verbs(&self) -> &'static [Verb] {
        &[Verb::Delete]
    }

    async fn delete(&self, _req: &ApiRequest, params: &[PathParam]) -> ViewResult {
        let id = record_id(params, NOT_FOUND)?;
        let user = self
            .users
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
        if !self.users.delete(user).await? {
            return Err(AppError::NotFound(NOT_FOUND.into()));
        }
        Ok(success_ok(json!({ "id": id }), "User deleted"))
    }
}
