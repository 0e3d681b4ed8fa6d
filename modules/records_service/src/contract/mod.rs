//! Contract layer - public models and errors for the records service
//!
//! This layer contains transport-agnostic models used by the domain and
//! mapped into wire shapes by the REST layer. NO serde derives on models -
//! these are pure domain types.

pub mod error;
pub mod model;

pub use error::RecordsError;
pub use model::{Category, CategoryDraft, Customer, CustomerDraft, Employee, EmployeeDraft};
