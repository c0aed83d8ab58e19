//! URL rules for the vehicle and user API, in match order.

use crate::handlers::{
    UserCreateView, UserDeleteView, UserListView, UserRetrieveView, UserUpdateView,
    VehicleCreateView, VehicleDeleteView, VehicleListView, VehicleRetrieveView, VehicleUpdateView,
};
use crate::router::UrlRouter;

pub fn api_router() -> Result<UrlRouter, regex::Error> {
    UrlRouter::new()
        .route(r"^/api/vehicles/?$", VehicleListView::build)?
        .route(r"^/api/vehicles/create/?$", VehicleCreateView::build)?
        .route(r"^/api/vehicles/(\d+)/?$", VehicleRetrieveView::build)?
        .route(r"^/api/vehicles/(\d+)/update/?$", VehicleUpdateView::build)?
        .route(r"^/api/vehicles/(\d+)/delete/?$", VehicleDeleteView::build)?
        .route(r"^/api/users/?$", UserListView::build)?
        .route(r"^/api/users/create/?$", UserCreateView::build)?
        .route(r"^/api/users/(\d+)/?$", UserRetrieveView::build)?
        .route(r"^/api/users/(\d+)/update/?$", UserUpdateView::build)?
        .route(r"^/api/users/(\d+)/delete/?$", UserDeleteView::build)
}
