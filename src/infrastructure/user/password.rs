//! Password hashing utilities using Argon2

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2-based password hasher
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::new();

        let hash = hasher.hash("correct horse 1").unwrap();

        assert!(hasher.verify("correct horse 1", &hash));
        assert!(!hasher.verify("wrong password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2Hasher::new();

        let hash1 = hasher.hash("same password 1").unwrap();
        let hash2 = hasher.hash("same password 1").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("same password 1", &hash1));
        assert!(hasher.verify("same password 1", &hash2));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let hasher = Argon2Hasher::new();
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }
}
