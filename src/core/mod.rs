//! Core layer - configuration, database, error handling and HTTP plumbing

pub mod config;
pub mod database;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod openapi;
pub mod router;
