//! Data model and serializers for a small social network: users, posts,
//! media, comments and a directed follow graph, stored in PostgreSQL.
//!
//! Rows are fetched with the explicit functions in [`repository`] and turned
//! into response payloads with their `serialize` methods.

pub mod config;
pub mod models;
pub mod repository;
pub mod structs;
pub mod utils;

pub use utils::app_error::AppError;
