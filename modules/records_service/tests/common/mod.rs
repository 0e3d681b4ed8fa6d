//! Shared test doubles: in-memory repositories behind the domain traits
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use records_service::contract::{
    Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft,
};
use records_service::domain::{CategoryRepository, CustomerRepository, EmployeeRepository};
use records_service::domain::Service;
use records_service::Config;
use std::collections::BTreeMap;
use std::sync::Arc;

fn next_id<T>(rows: &BTreeMap<i32, T>) -> i32 {
    rows.keys().max().copied().unwrap_or(0) + 1
}

fn page<T: Clone>(rows: &BTreeMap<i32, T>, limit: u64, offset: u64) -> Vec<T> {
    rows.values()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

// ===== Customer repository double =====

#[derive(Clone, Default)]
pub struct MockCustomerRepo {
    rows: Arc<RwLock<BTreeMap<i32, Customer>>>,
}

impl MockCustomerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }
}

#[async_trait]
impl CustomerRepository for MockCustomerRepo {
    async fn create(&self, draft: &CustomerDraft) -> anyhow::Result<Customer> {
        let mut rows = self.rows.write();
        let customer = Customer {
            customer_id: next_id(&rows),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            city: draft.city.clone(),
            country: draft.country.clone(),
        };
        rows.insert(customer.customer_id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, customer_id: i32) -> anyhow::Result<Option<Customer>> {
        Ok(self.rows.read().get(&customer_id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> anyhow::Result<Option<Customer>> {
        Ok(self
            .rows
            .read()
            .values()
            .find(|c| c.email == email && Some(c.customer_id) != exclude_id)
            .cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Customer>> {
        Ok(page(&self.rows.read(), limit, offset))
    }

    async fn update(&self, customer_id: i32, draft: &CustomerDraft) -> anyhow::Result<Customer> {
        let mut rows = self.rows.write();
        let Some(existing) = rows.get_mut(&customer_id) else {
            anyhow::bail!("customer {customer_id} missing");
        };
        existing.first_name = draft.first_name.clone();
        existing.last_name = draft.last_name.clone();
        existing.email = draft.email.clone();
        existing.phone = draft.phone.clone();
        existing.address = draft.address.clone();
        existing.city = draft.city.clone();
        existing.country = draft.country.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, customer_id: i32) -> anyhow::Result<u64> {
        Ok(u64::from(self.rows.write().remove(&customer_id).is_some()))
    }
}

// ===== Category repository double =====

#[derive(Clone, Default)]
pub struct MockCategoryRepo {
    rows: Arc<RwLock<BTreeMap<i32, Category>>>,
}

impl MockCategoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }
}

#[async_trait]
impl CategoryRepository for MockCategoryRepo {
    async fn create(&self, draft: &CategoryDraft) -> anyhow::Result<Category> {
        let mut rows = self.rows.write();
        let category = Category {
            category_id: next_id(&rows),
            category_name: draft.category_name.clone(),
            description: draft.description.clone(),
        };
        rows.insert(category.category_id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, category_id: i32) -> anyhow::Result<Option<Category>> {
        Ok(self.rows.read().get(&category_id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> anyhow::Result<Option<Category>> {
        Ok(self
            .rows
            .read()
            .values()
            .find(|c| c.category_name == name && Some(c.category_id) != exclude_id)
            .cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Category>> {
        Ok(page(&self.rows.read(), limit, offset))
    }

    async fn update(&self, category_id: i32, draft: &CategoryDraft) -> anyhow::Result<Category> {
        let mut rows = self.rows.write();
        let Some(existing) = rows.get_mut(&category_id) else {
            anyhow::bail!("category {category_id} missing");
        };
        existing.category_name = draft.category_name.clone();
        existing.description = draft.description.clone();
        Ok(existing.clone())
    }

    async fn delete(&self, category_id: i32) -> anyhow::Result<u64> {
        Ok(u64::from(self.rows.write().remove(&category_id).is_some()))
    }
}

// ===== Employee repository double =====

#[derive(Clone, Default)]
pub struct MockEmployeeRepo {
    rows: Arc<RwLock<BTreeMap<i32, Employee>>>,
}

impl MockEmployeeRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepo {
    async fn create(&self, draft: &EmployeeDraft) -> anyhow::Result<Employee> {
        let mut rows = self.rows.write();
        let employee = Employee {
            employee_id: next_id(&rows),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            position: draft.position.clone(),
            hire_date: draft.hire_date,
            salary: draft.salary,
        };
        rows.insert(employee.employee_id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, employee_id: i32) -> anyhow::Result<Option<Employee>> {
        Ok(self.rows.read().get(&employee_id).cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Employee>> {
        Ok(page(&self.rows.read(), limit, offset))
    }

    async fn update(&self, employee_id: i32, draft: &EmployeeDraft) -> anyhow::Result<Employee> {
        let mut rows = self.rows.write();
        let Some(existing) = rows.get_mut(&employee_id) else {
            anyhow::bail!("employee {employee_id} missing");
        };
        existing.first_name = draft.first_name.clone();
        existing.last_name = draft.last_name.clone();
        existing.position = draft.position.clone();
        existing.hire_date = draft.hire_date;
        existing.salary = draft.salary;
        Ok(existing.clone())
    }

    async fn delete(&self, employee_id: i32) -> anyhow::Result<u64> {
        Ok(u64::from(self.rows.write().remove(&employee_id).is_some()))
    }
}

// ===== Service wiring =====

/// Service over fresh in-memory repositories with default page bounds
pub fn test_service() -> Service {
    Service::new(
        Arc::new(MockCustomerRepo::new()),
        Arc::new(MockCategoryRepo::new()),
        Arc::new(MockEmployeeRepo::new()),
        Config::default(),
    )
}

/// Like [`test_service`] but hands back the repository doubles too
pub fn test_service_with_repos() -> (
    Service,
    Arc<MockCustomerRepo>,
    Arc<MockCategoryRepo>,
    Arc<MockEmployeeRepo>,
) {
    let customers = Arc::new(MockCustomerRepo::new());
    let categories = Arc::new(MockCategoryRepo::new());
    let employees = Arc::new(MockEmployeeRepo::new());
    let service = Service::new(
        customers.clone(),
        categories.clone(),
        employees.clone(),
        Config::default(),
    );
    (service, customers, categories, employees)
}

// ===== Fixtures =====

pub fn customer_draft(email: &str) -> CustomerDraft {
    CustomerDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        address: Some("12 Analytical Row".to_string()),
        city: Some("London".to_string()),
        country: Some("UK".to_string()),
    }
}

pub fn category_draft(name: &str) -> CategoryDraft {
    CategoryDraft {
        category_name: name.to_string(),
        description: Some("Soft drinks, coffees, teas".to_string()),
    }
}

pub fn employee_draft(first_name: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: "Hopper".to_string(),
        position: Some("Engineer".to_string()),
        hire_date: chrono::NaiveDate::from_ymd_opt(2021, 4, 12).expect("valid date"),
        salary: rust_decimal::Decimal::new(5500000, 2),
    }
}
