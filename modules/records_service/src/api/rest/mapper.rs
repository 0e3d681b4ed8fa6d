//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From implementations for conversion between
//! REST DTOs and transport-agnostic contract models.

use super::dto::{
    CategoryDto, CategoryRequest, CustomerDto, CustomerRequest, EmployeeDto, EmployeeRequest,
};
use crate::contract::{Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft};

// ===== Customer conversions =====

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            city: customer.city,
            country: customer.country,
        }
    }
}

impl From<CustomerRequest> for CustomerDraft {
    fn from(req: CustomerRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            city: req.city,
            country: req.country,
        }
    }
}

// ===== Category conversions =====

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.category_id,
            category_name: category.category_name,
            description: category.description,
        }
    }
}

impl From<CategoryRequest> for CategoryDraft {
    fn from(req: CategoryRequest) -> Self {
        Self {
            category_name: req.category_name,
            description: req.description,
        }
    }
}

// ===== Employee conversions =====

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            hire_date: employee.hire_date,
            salary: employee.salary,
        }
    }
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            position: req.position,
            hire_date: req.hire_date,
            salary: req.salary,
        }
    }
}
