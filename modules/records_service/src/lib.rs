//! Records Service Module
//!
//! Customer, category, and employee records behind a versioned CRUD API.
//! Each entity mirrors a single relational table; the service performs
//! lookup-then-respond work only, with the store owning all persistent state.

// Public exports
pub mod contract;
pub use contract::{
    error::RecordsError, Category, CategoryDraft, Customer, CustomerDraft, Employee,
    EmployeeDraft,
};

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
