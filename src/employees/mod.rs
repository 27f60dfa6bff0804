//! # Employees Module
//!
//! The employee form: field validation, the in-memory record store with its
//! pending draft, and the HTTP routes the browser form calls.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validators;


pub use routes::employees_routes;
