//! Database migrations for the records service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_customers::Migration),
            Box::new(m20250301_000002_create_categories::Migration),
            Box::new(m20250301_000003_create_employees::Migration),
        ]
    }
}

mod m20250301_000001_create_customers {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customers::CustomerId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Customers::FirstName)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Customers::LastName)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Customers::Email).string_len(100).not_null())
                        .col(ColumnDef::new(Customers::Phone).string_len(15))
                        .col(ColumnDef::new(Customers::Address).text())
                        .col(ColumnDef::new(Customers::City).string_len(50))
                        .col(ColumnDef::new(Customers::Country).string_len(50))
                        .to_owned(),
                )
                .await?;

            // The email uniqueness invariant lives in the store
            manager
                .create_index(
                    Index::create()
                        .name("uq_customers_email")
                        .table(Customers::Table)
                        .col(Customers::Email)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Customers {
        Table,
        CustomerId,
        FirstName,
        LastName,
        Email,
        Phone,
        Address,
        City,
        Country,
    }
}

mod m20250301_000002_create_categories {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::CategoryId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Categories::CategoryName)
                                .string_len(100)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Categories::Description).string_len(500))
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Categories {
        Table,
        CategoryId,
        CategoryName,
        Description,
    }
}

mod m20250301_000003_create_employees {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employees::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Employees::EmployeeId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Employees::FirstName)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Employees::LastName)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Employees::Position).string_len(50))
                        .col(ColumnDef::new(Employees::HireDate).date().not_null())
                        .col(
                            ColumnDef::new(Employees::Salary)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Employees::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Employees {
        Table,
        EmployeeId,
        FirstName,
        LastName,
        Position,
        HireDate,
        Salary,
    }
}
