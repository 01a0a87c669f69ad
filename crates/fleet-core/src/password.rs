//! One-way salted password hashing over bcrypt.

use crate::error::AppError;

/// Hash a plaintext password with the default bcrypt cost.
///
/// Each call salts independently, so equal inputs produce different hashes.
pub fn hash(plain: &str) -> Result<String, AppError> {
    hash_with_cost(plain, bcrypt::DEFAULT_COST)
}

/// Hash with an explicit cost factor. Higher cost is slower and harder to
/// brute-force; tune it so request latency stays bounded.
pub fn hash_with_cost(plain: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(plain, cost).map_err(|e| AppError::HashingError(e.to_string()))
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed hash is treated as a mismatch, never as an error.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}
