//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters shared by every list endpoint
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page size, 1 up to the configured maximum (default 50)
    pub limit: Option<u64>,

    /// Number of records to skip
    pub offset: Option<u64>,
}

// ===== Customer DTOs =====

/// Customer response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    /// Store-generated identity
    pub customer_id: i32,

    #[schema(example = "Ada")]
    pub first_name: String,

    #[schema(example = "Lovelace")]
    pub last_name: String,

    /// Unique across customers
    #[schema(example = "ada@example.com")]
    pub email: String,

    pub phone: Option<String>,

    pub address: Option<String>,

    pub city: Option<String>,

    pub country: Option<String>,
}

/// Create/update customer request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CustomerRequest {
    #[schema(example = "Ada")]
    pub first_name: String,

    #[schema(example = "Lovelace")]
    pub last_name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub country: Option<String>,
}

/// Paginated list of customers
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerListResponse {
    /// Page of customers in primary-key order
    pub items: Vec<CustomerDto>,

    /// Number of items in this page
    pub total: usize,

    /// Applied page size
    pub limit: u64,

    /// Applied offset
    pub offset: u64,
}

// ===== Category DTOs =====

/// Category response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    /// Store-generated identity
    pub category_id: i32,

    #[schema(example = "Beverages")]
    pub category_name: String,

    pub description: Option<String>,
}

/// Create/update category request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CategoryRequest {
    #[schema(example = "Beverages")]
    pub category_name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Paginated list of categories
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryListResponse {
    /// Page of categories in primary-key order
    pub items: Vec<CategoryDto>,

    /// Number of items in this page
    pub total: usize,

    /// Applied page size
    pub limit: u64,

    /// Applied offset
    pub offset: u64,
}

// ===== Employee DTOs =====

/// Employee response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDto {
    /// Store-generated identity
    pub employee_id: i32,

    #[schema(example = "Grace")]
    pub first_name: String,

    #[schema(example = "Hopper")]
    pub last_name: String,

    pub position: Option<String>,

    /// Calendar date of hire
    pub hire_date: NaiveDate,

    /// Serialized as an exact decimal string
    #[schema(example = "55000.00")]
    pub salary: Decimal,
}

/// Create/update employee request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmployeeRequest {
    #[schema(example = "Grace")]
    pub first_name: String,

    #[schema(example = "Hopper")]
    pub last_name: String,

    #[serde(default)]
    pub position: Option<String>,

    pub hire_date: NaiveDate,

    #[schema(example = "55000.00")]
    pub salary: Decimal,
}

/// Paginated list of employees
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeListResponse {
    /// Page of employees in primary-key order
    pub items: Vec<EmployeeDto>,

    /// Number of items in this page
    pub total: usize,

    /// Applied page size
    pub limit: u64,

    /// Applied offset
    pub offset: u64,
}

// Note: Conversion implementations live in mapper.rs
