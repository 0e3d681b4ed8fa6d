//! SeaORM storage: entities, mappers, repositories, and migrations

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
