//! Contract models for the records service
//!
//! Three flat entities, each a direct mirror of a relational table with
//! store-generated integer identity. Drafts carry everything but the
//! identity and are used for both create and full-overwrite update.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Customer record as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-generated identity
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Unique across customers
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Customer payload without identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Category record as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Store-generated identity
    pub category_id: i32,
    /// Unique at the service layer
    pub category_name: String,
    pub description: Option<String>,
}

/// Category payload without identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub category_name: String,
    pub description: Option<String>,
}

/// Employee record as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Store-generated identity
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub hire_date: NaiveDate,
    /// Monetary amount with two fractional digits
    pub salary: Decimal,
}

/// Employee payload without identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub hire_date: NaiveDate,
    pub salary: Decimal,
}
