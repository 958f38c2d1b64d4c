//! Request middleware: caller identity extraction and error mapping.

pub mod auth;
pub mod error;
