//! HTTP request handlers - thin layer that delegates to the domain service

use crate::domain::Service;

use super::dto::*;
use super::error::{map_domain_error, Problem};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

// ===== Customer Handlers =====

/// List customers with pagination
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of customers", body = CustomerListResponse),
        (status = 422, description = "Invalid pagination parameters", body = Problem)
    ),
    tag = "customers"
)]
pub async fn list_customers(
    State(service): State<Arc<Service>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CustomerListResponse>, Problem> {
    let page = service
        .resolve_page(query.limit, query.offset)
        .map_err(map_domain_error)?;
    let customers = service.list_customers(page).await.map_err(map_domain_error)?;

    let items: Vec<CustomerDto> = customers.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(CustomerListResponse {
        items,
        total,
        limit: page.limit,
        offset: page.offset,
    }))
}

/// Get a customer by id
#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = CustomerDto),
        (status = 404, description = "Customer not found", body = Problem)
    ),
    tag = "customers"
)]
pub async fn get_customer(
    State(service): State<Arc<Service>>,
    Path(customer_id): Path<i32>,
) -> Result<Json<CustomerDto>, Problem> {
    let customer = service
        .get_customer(customer_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(customer.into()))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Duplicate email", body = Problem),
        (status = 422, description = "Invalid payload", body = Problem)
    ),
    tag = "customers"
)]
pub async fn create_customer(
    State(service): State<Arc<Service>>,
    Json(req): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerDto>), Problem> {
    let customer = service
        .create_customer(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Overwrite a customer
#[utoipa::path(
    put,
    path = "/api/v1/customers/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Duplicate email", body = Problem),
        (status = 404, description = "Customer not found", body = Problem),
        (status = 422, description = "Invalid payload", body = Problem)
    ),
    tag = "customers"
)]
pub async fn update_customer(
    State(service): State<Arc<Service>>,
    Path(customer_id): Path<i32>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<CustomerDto>, Problem> {
    let customer = service
        .update_customer(customer_id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(customer.into()))
}

/// Delete a customer
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = Problem)
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    State(service): State<Arc<Service>>,
    Path(customer_id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service
        .delete_customer(customer_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Category Handlers =====

/// List categories with pagination
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of categories", body = CategoryListResponse),
        (status = 422, description = "Invalid pagination parameters", body = Problem)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<Service>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CategoryListResponse>, Problem> {
    let page = service
        .resolve_page(query.limit, query.offset)
        .map_err(map_domain_error)?;
    let categories = service
        .list_categories(page)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<CategoryDto> = categories.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(CategoryListResponse {
        items,
        total,
        limit: page.limit,
        offset: page.offset,
    }))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = CategoryDto),
        (status = 404, description = "Category not found", body = Problem)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<Service>>,
    Path(category_id): Path<i32>,
) -> Result<Json<CategoryDto>, Problem> {
    let category = service
        .get_category(category_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

/// Create a category; names are unique
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 400, description = "Duplicate name", body = Problem),
        (status = 422, description = "Invalid payload", body = Problem)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<Service>>,
    Json(req): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryDto>), Problem> {
    let category = service
        .create_category(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Overwrite a category
#[utoipa::path(
    put,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = i32, Path, description = "Category id")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "Duplicate name", body = Problem),
        (status = 404, description = "Category not found", body = Problem),
        (status = 422, description = "Invalid payload", body = Problem)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<Service>>,
    Path(category_id): Path<i32>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<CategoryDto>, Problem> {
    let category = service
        .update_category(category_id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{category_id}",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = Problem)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<Service>>,
    Path(category_id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service
        .delete_category(category_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Employee Handlers =====

/// List employees with pagination
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of employees", body = EmployeeListResponse),
        (status = 422, description = "Invalid pagination parameters", body = Problem)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(service): State<Arc<Service>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<EmployeeListResponse>, Problem> {
    let page = service
        .resolve_page(query.limit, query.offset)
        .map_err(map_domain_error)?;
    let employees = service.list_employees(page).await.map_err(map_domain_error)?;

    let items: Vec<EmployeeDto> = employees.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(EmployeeListResponse {
        items,
        total,
        limit: page.limit,
        offset: page.offset,
    }))
}

/// Get an employee by id
#[utoipa::path(
    get,
    path = "/api/v1/employees/{employee_id}",
    params(("employee_id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = Problem)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(service): State<Arc<Service>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<EmployeeDto>, Problem> {
    let employee = service
        .get_employee(employee_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employee.into()))
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeDto),
        (status = 422, description = "Invalid payload", body = Problem)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(service): State<Arc<Service>>,
    Json(req): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeDto>), Problem> {
    let employee = service
        .create_employee(&req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Overwrite an employee
#[utoipa::path(
    put,
    path = "/api/v1/employees/{employee_id}",
    params(("employee_id" = i32, Path, description = "Employee id")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeDto),
        (status = 404, description = "Employee not found", body = Problem),
        (status = 422, description = "Invalid payload", body = Problem)
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(service): State<Arc<Service>>,
    Path(employee_id): Path<i32>,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<EmployeeDto>, Problem> {
    let employee = service
        .update_employee(employee_id, &req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(employee.into()))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{employee_id}",
    params(("employee_id" = i32, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = Problem)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(service): State<Arc<Service>>,
    Path(employee_id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service
        .delete_employee(employee_id)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
