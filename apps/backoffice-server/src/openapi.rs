//! OpenAPI document assembly for the records endpoints

use records_service::api::rest::{dto, error, handlers};
use utoipa::OpenApi;

/// Generated API documentation, served by the binary at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Back-office Records API",
        description = "Customer, category, and employee records behind a versioned CRUD API"
    ),
    paths(
        handlers::list_customers,
        handlers::get_customer,
        handlers::create_customer,
        handlers::update_customer,
        handlers::delete_customer,
        handlers::list_categories,
        handlers::get_category,
        handlers::create_category,
        handlers::update_category,
        handlers::delete_category,
        handlers::list_employees,
        handlers::get_employee,
        handlers::create_employee,
        handlers::update_employee,
        handlers::delete_employee,
    ),
    components(schemas(
        dto::CustomerDto,
        dto::CustomerRequest,
        dto::CustomerListResponse,
        dto::CategoryDto,
        dto::CategoryRequest,
        dto::CategoryListResponse,
        dto::EmployeeDto,
        dto::EmployeeRequest,
        dto::EmployeeListResponse,
        error::Problem,
    )),
    tags(
        (name = "customers", description = "Customer records"),
        (name = "categories", description = "Category records"),
        (name = "employees", description = "Employee records")
    )
)]
pub struct ApiDoc;
