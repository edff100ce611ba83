pub mod books;
pub mod nonce;
pub mod reviews;
