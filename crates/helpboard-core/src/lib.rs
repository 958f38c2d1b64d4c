//! # Helpboard Core
//!
//! The domain layer of the Helpboard backend.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod service;

pub use error::{DomainError, StoreError};
pub use service::PostService;
