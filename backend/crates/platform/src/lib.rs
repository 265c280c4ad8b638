//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations, free of any domain vocabulary:
//! - Password hashing (Argon2id, NIST SP 800-63B length rules)
//! - Random bytes, base64 and HMAC-SHA256 helpers
//! - JWT signing and verification pinned to `HS256`

pub mod crypto;
pub mod password;
pub mod token;
