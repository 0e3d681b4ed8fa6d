//! Domain service - business logic orchestration
//!
//! Thin orchestration over the repositories: payload validation,
//! uniqueness pre-checks, and mapping of storage outcomes onto the
//! contract error kinds. The store's own constraints (primary keys, the
//! unique email index) remain the authoritative backstop.

use crate::config::Config;
use crate::contract::{
    Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft, RecordsError,
};

use super::repository::{CategoryRepository, CustomerRepository, EmployeeRepository};
use super::validation;
use std::sync::Arc;

/// Window onto a primary-key-ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

/// Log the underlying cause and collapse it to the opaque internal error
fn storage_error(err: anyhow::Error) -> RecordsError {
    tracing::error!("storage error: {err:?}");
    RecordsError::Internal
}

/// Domain service for customer, category, and employee records
pub struct Service {
    customers: Arc<dyn CustomerRepository>,
    categories: Arc<dyn CategoryRepository>,
    employees: Arc<dyn EmployeeRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        categories: Arc<dyn CategoryRepository>,
        employees: Arc<dyn EmployeeRepository>,
        config: Config,
    ) -> Self {
        Self {
            customers,
            categories,
            employees,
            config,
        }
    }

    /// Resolve optional pagination parameters into a validated page window
    pub fn resolve_page(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<Page, RecordsError> {
        let limit = limit.unwrap_or(self.config.default_page_size);
        if limit == 0 || limit > self.config.max_page_size {
            return Err(RecordsError::Validation {
                message: format!(
                    "limit must be between 1 and {}",
                    self.config.max_page_size
                ),
            });
        }
        Ok(Page {
            limit,
            offset: offset.unwrap_or(0),
        })
    }

    // ===== Customer Operations =====

    /// List customers ordered by primary key
    pub async fn list_customers(&self, page: Page) -> Result<Vec<Customer>, RecordsError> {
        self.customers
            .list(page.limit, page.offset)
            .await
            .map_err(storage_error)
    }

    /// Get a customer by primary key
    pub async fn get_customer(&self, customer_id: i32) -> Result<Customer, RecordsError> {
        self.customers
            .find_by_id(customer_id)
            .await
            .map_err(storage_error)?
            .ok_or(RecordsError::NotFound {
                resource: "Customer",
                id: customer_id,
            })
    }

    /// Validate and insert a new customer
    pub async fn create_customer(&self, draft: &CustomerDraft) -> Result<Customer, RecordsError> {
        validation::validate_customer(draft)?;
        self.ensure_email_free(&draft.email, None).await?;
        self.customers.create(draft).await.map_err(storage_error)
    }

    /// Overwrite all mutable fields of an existing customer
    pub async fn update_customer(
        &self,
        customer_id: i32,
        draft: &CustomerDraft,
    ) -> Result<Customer, RecordsError> {
        validation::validate_customer(draft)?;
        self.get_customer(customer_id).await?;
        self.ensure_email_free(&draft.email, Some(customer_id)).await?;
        self.customers
            .update(customer_id, draft)
            .await
            .map_err(storage_error)
    }

    /// Delete a customer; zero rows affected signals not-found
    pub async fn delete_customer(&self, customer_id: i32) -> Result<(), RecordsError> {
        let removed = self
            .customers
            .delete(customer_id)
            .await
            .map_err(storage_error)?;
        if removed == 0 {
            return Err(RecordsError::NotFound {
                resource: "Customer",
                id: customer_id,
            });
        }
        Ok(())
    }

    async fn ensure_email_free(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<(), RecordsError> {
        let existing = self
            .customers
            .find_by_email(email, exclude_id)
            .await
            .map_err(storage_error)?;
        if existing.is_some() {
            return Err(RecordsError::Conflict {
                reason: format!("customer with email '{email}' already exists"),
            });
        }
        Ok(())
    }

    // ===== Category Operations =====

    /// List categories ordered by primary key
    pub async fn list_categories(&self, page: Page) -> Result<Vec<Category>, RecordsError> {
        self.categories
            .list(page.limit, page.offset)
            .await
            .map_err(storage_error)
    }

    /// Get a category by primary key
    pub async fn get_category(&self, category_id: i32) -> Result<Category, RecordsError> {
        self.categories
            .find_by_id(category_id)
            .await
            .map_err(storage_error)?
            .ok_or(RecordsError::NotFound {
                resource: "Category",
                id: category_id,
            })
    }

    /// Validate and insert a new category; names are unique
    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, RecordsError> {
        validation::validate_category(draft)?;
        self.ensure_category_name_free(&draft.category_name, None)
            .await?;
        self.categories.create(draft).await.map_err(storage_error)
    }

    /// Overwrite all mutable fields of an existing category
    pub async fn update_category(
        &self,
        category_id: i32,
        draft: &CategoryDraft,
    ) -> Result<Category, RecordsError> {
        validation::validate_category(draft)?;
        self.get_category(category_id).await?;
        self.ensure_category_name_free(&draft.category_name, Some(category_id))
            .await?;
        self.categories
            .update(category_id, draft)
            .await
            .map_err(storage_error)
    }

    /// Delete a category; zero rows affected signals not-found
    pub async fn delete_category(&self, category_id: i32) -> Result<(), RecordsError> {
        let removed = self
            .categories
            .delete(category_id)
            .await
            .map_err(storage_error)?;
        if removed == 0 {
            return Err(RecordsError::NotFound {
                resource: "Category",
                id: category_id,
            });
        }
        Ok(())
    }

    async fn ensure_category_name_free(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<(), RecordsError> {
        let existing = self
            .categories
            .find_by_name(name, exclude_id)
            .await
            .map_err(storage_error)?;
        if existing.is_some() {
            return Err(RecordsError::Conflict {
                reason: format!("category with name '{name}' already exists"),
            });
        }
        Ok(())
    }

    // ===== Employee Operations =====

    /// List employees ordered by primary key
    pub async fn list_employees(&self, page: Page) -> Result<Vec<Employee>, RecordsError> {
        self.employees
            .list(page.limit, page.offset)
            .await
            .map_err(storage_error)
    }

    /// Get an employee by primary key
    pub async fn get_employee(&self, employee_id: i32) -> Result<Employee, RecordsError> {
        self.employees
            .find_by_id(employee_id)
            .await
            .map_err(storage_error)?
            .ok_or(RecordsError::NotFound {
                resource: "Employee",
                id: employee_id,
            })
    }

    /// Validate and insert a new employee
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee, RecordsError> {
        validation::validate_employee(draft)?;
        self.employees.create(draft).await.map_err(storage_error)
    }

    /// Overwrite all mutable fields of an existing employee
    pub async fn update_employee(
        &self,
        employee_id: i32,
        draft: &EmployeeDraft,
    ) -> Result<Employee, RecordsError> {
        validation::validate_employee(draft)?;
        self.get_employee(employee_id).await?;
        self.employees
            .update(employee_id, draft)
            .await
            .map_err(storage_error)
    }

    /// Delete an employee; zero rows affected signals not-found
    pub async fn delete_employee(&self, employee_id: i32) -> Result<(), RecordsError> {
        let removed = self
            .employees
            .delete(employee_id)
            .await
            .map_err(storage_error)?;
        if removed == 0 {
            return Err(RecordsError::NotFound {
                resource: "Employee",
                id: employee_id,
            });
        }
        Ok(())
    }
}
