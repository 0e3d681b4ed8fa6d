//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Drafts map to
//! active models with the identity left `NotSet` so the store generates it
//! on insert; update paths set the key explicitly.

use crate::contract::{Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft};

use super::entity;

// ===== Customer Conversions =====

impl From<entity::customer::Model> for Customer {
    fn from(entity: entity::customer::Model) -> Self {
        Self {
            customer_id: entity.customer_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            country: entity.country,
        }
    }
}

impl From<&CustomerDraft> for entity::customer::ActiveModel {
    fn from(draft: &CustomerDraft) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        Self {
            customer_id: NotSet,
            first_name: Set(draft.first_name.clone()),
            last_name: Set(draft.last_name.clone()),
            email: Set(draft.email.clone()),
            phone: Set(draft.phone.clone()),
            address: Set(draft.address.clone()),
            city: Set(draft.city.clone()),
            country: Set(draft.country.clone()),
        }
    }
}

// ===== Category Conversions =====

impl From<entity::category::Model> for Category {
    fn from(entity: entity::category::Model) -> Self {
        Self {
            category_id: entity.category_id,
            category_name: entity.category_name,
            description: entity.description,
        }
    }
}

impl From<&CategoryDraft> for entity::category::ActiveModel {
    fn from(draft: &CategoryDraft) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        Self {
            category_id: NotSet,
            category_name: Set(draft.category_name.clone()),
            description: Set(draft.description.clone()),
        }
    }
}

// ===== Employee Conversions =====

impl From<entity::employee::Model> for Employee {
    fn from(entity: entity::employee::Model) -> Self {
        Self {
            employee_id: entity.employee_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            position: entity.position,
            hire_date: entity.hire_date,
            salary: entity.salary,
        }
    }
}

impl From<&EmployeeDraft> for entity::employee::ActiveModel {
    fn from(draft: &EmployeeDraft) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        Self {
            employee_id: NotSet,
            first_name: Set(draft.first_name.clone()),
            last_name: Set(draft.last_name.clone()),
            position: Set(draft.position.clone()),
            hire_date: Set(draft.hire_date),
            salary: Set(draft.salary),
        }
    }
}
