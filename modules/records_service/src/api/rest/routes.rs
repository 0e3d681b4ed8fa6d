//! Route registration for the records REST API

use crate::domain::Service;

use super::handlers;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Build the records router. The caller mounts it under its versioned
/// prefix; paths registered here are relative to that mount point.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/customers/{customer_id}",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{category_id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/{employee_id}",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .with_state(service)
}
