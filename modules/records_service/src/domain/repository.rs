//! Repository traits for data access
//!
//! These traits define the interface for single-table data access.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for customer records
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer and return it with its generated identity
    async fn create(&self, draft: &CustomerDraft) -> Result<Customer>;

    /// Find a customer by primary key
    async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>>;

    /// Find a customer by exact email, optionally ignoring one record
    /// (used when an update keeps its own address)
    async fn find_by_email(&self, email: &str, exclude_id: Option<i32>)
        -> Result<Option<Customer>>;

    /// List customers ordered by primary key
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Customer>>;

    /// Overwrite all mutable fields of an existing customer
    async fn update(&self, customer_id: i32, draft: &CustomerDraft) -> Result<Customer>;

    /// Delete by primary key, returning the number of rows removed
    async fn delete(&self, customer_id: i32) -> Result<u64>;
}

/// Repository for category records
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category and return it with its generated identity
    async fn create(&self, draft: &CategoryDraft) -> Result<Category>;

    /// Find a category by primary key
    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>>;

    /// Find a category by exact name, optionally ignoring one record
    async fn find_by_name(&self, name: &str, exclude_id: Option<i32>) -> Result<Option<Category>>;

    /// List categories ordered by primary key
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Category>>;

    /// Overwrite all mutable fields of an existing category
    async fn update(&self, category_id: i32, draft: &CategoryDraft) -> Result<Category>;

    /// Delete by primary key, returning the number of rows removed
    async fn delete(&self, category_id: i32) -> Result<u64>;
}

/// Repository for employee records
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee and return it with its generated identity
    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee>;

    /// Find an employee by primary key
    async fn find_by_id(&self, employee_id: i32) -> Result<Option<Employee>>;

    /// List employees ordered by primary key
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Employee>>;

    /// Overwrite all mutable fields of an existing employee
    async fn update(&self, employee_id: i32, draft: &EmployeeDraft) -> Result<Employee>;

    /// Delete by primary key, returning the number of rows removed
    async fn delete(&self, employee_id: i32) -> Result<u64>;
}
