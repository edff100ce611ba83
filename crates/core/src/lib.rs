//! Domain types, sanitization and validation for the book reviews service.
//!
//! This crate has no I/O: everything here is a pure function of its input,
//! shared by the storage, catalog and HTTP layers.

pub mod error;
pub mod nonce;
pub mod review;
pub mod sanitize;
pub mod search;
pub mod types;
