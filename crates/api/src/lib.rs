//! HTTP surface of the book review service.
//!
//! Exposes catalog search, review submission and review listing under
//! `/api/v1`, each guarded by an anti-forgery nonce, plus `/health`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
