//! SeaORM entities for database tables

/// Customers table module
pub mod customer {
    use sea_orm::entity::prelude::*;

    /// Customers table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "customers")]
    pub struct Model {
        /// Store-generated identity
        #[sea_orm(primary_key)]
        pub customer_id: i32,

        pub first_name: String,

        pub last_name: String,

        /// Unique index enforced by the migration
        pub email: String,

        pub phone: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub address: Option<String>,

        pub city: Option<String>,

        pub country: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Categories table module
pub mod category {
    use sea_orm::entity::prelude::*;

    /// Categories table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "categories")]
    pub struct Model {
        /// Store-generated identity
        #[sea_orm(primary_key)]
        pub category_id: i32,

        pub category_name: String,

        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Employees table module
pub mod employee {
    use sea_orm::entity::prelude::*;

    /// Employees table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "employees")]
    pub struct Model {
        /// Store-generated identity
        #[sea_orm(primary_key)]
        pub employee_id: i32,

        pub first_name: String,

        pub last_name: String,

        pub position: Option<String>,

        pub hire_date: Date,

        /// DECIMAL(10, 2)
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub salary: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
