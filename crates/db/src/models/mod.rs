//! Row structs for the service's tables.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching a
//! database row. Create payloads are validated in `bookreviews_core` before
//! they reach this crate.

pub mod review;
