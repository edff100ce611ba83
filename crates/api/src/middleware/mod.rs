//! Request guards applied as extractors.
//!
//! - [`nonce::VerifiedNonce`] -- Requires a valid anti-forgery token in the
//!   `X-Review-Nonce` header.

pub mod nonce;
