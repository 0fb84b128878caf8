//! # shorewatch-auth
//!
//! Authentication primitives for Shorewatch.
//!
//! ## Modules
//!
//! - `jwt` — stateless JWT token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//!
//! Tokens are self-contained: signature plus expiry are the only checks,
//! there is no server-side session store.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
