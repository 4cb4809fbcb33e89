//! Health Companion backend library
//!
//! Exposes the application modules for integration tests and the binary.

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
