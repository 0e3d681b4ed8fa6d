//! SeaORM repository implementations

use crate::contract::{Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft};
use crate::domain::repository::{CategoryRepository, CustomerRepository, EmployeeRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use super::entity;

// ===== Customer Repository =====

pub struct SeaOrmCustomerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, draft: &CustomerDraft) -> Result<Customer> {
        let active: entity::customer::ActiveModel = draft.into();

        let result = entity::customer::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>> {
        let result = entity::customer::Entity::find_by_id(customer_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<Customer>> {
        let mut query =
            entity::customer::Entity::find().filter(entity::customer::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::customer::Column::CustomerId.ne(id));
        }

        Ok(query.one(&*self.db).await?.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Customer>> {
        let results = entity::customer::Entity::find()
            .order_by_asc(entity::customer::Column::CustomerId)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, customer_id: i32, draft: &CustomerDraft) -> Result<Customer> {
        let mut active: entity::customer::ActiveModel = draft.into();
        active.customer_id = Set(customer_id);

        let result = entity::customer::Entity::update(active)
            .exec(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn delete(&self, customer_id: i32) -> Result<u64> {
        let result = entity::customer::Entity::delete_by_id(customer_id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

// ===== Category Repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn create(&self, draft: &CategoryDraft) -> Result<Category> {
        let active: entity::category::ActiveModel = draft.into();

        let result = entity::category::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>> {
        let result = entity::category::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_name(&self, name: &str, exclude_id: Option<i32>) -> Result<Option<Category>> {
        let mut query = entity::category::Entity::find()
            .filter(entity::category::Column::CategoryName.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::CategoryId.ne(id));
        }

        Ok(query.one(&*self.db).await?.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Category>> {
        let results = entity::category::Entity::find()
            .order_by_asc(entity::category::Column::CategoryId)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, category_id: i32, draft: &CategoryDraft) -> Result<Category> {
        let mut active: entity::category::ActiveModel = draft.into();
        active.category_id = Set(category_id);

        let result = entity::category::Entity::update(active)
            .exec(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn delete(&self, category_id: i32) -> Result<u64> {
        let result = entity::category::Entity::delete_by_id(category_id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

// ===== Employee Repository =====

pub struct SeaOrmEmployeeRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee> {
        let active: entity::employee::ActiveModel = draft.into();

        let result = entity::employee::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, employee_id: i32) -> Result<Option<Employee>> {
        let result = entity::employee::Entity::find_by_id(employee_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Employee>> {
        let results = entity::employee::Entity::find()
            .order_by_asc(entity::employee::Column::EmployeeId)
            .limit(limit)
            .offset(offset)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, employee_id: i32, draft: &EmployeeDraft) -> Result<Employee> {
        let mut active: entity::employee::ActiveModel = draft.into();
        active.employee_id = Set(employee_id);

        let result = entity::employee::Entity::update(active)
            .exec(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn delete(&self, employee_id: i32) -> Result<u64> {
        let result = entity::employee::Entity::delete_by_id(employee_id)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
