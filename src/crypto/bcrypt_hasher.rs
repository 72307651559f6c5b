//! bcrypt implementation of [`PasswordHasher`]

use super::hasher::PasswordHasher;
use crate::domain::CredentialError;

/// Default bcrypt cost factor
pub const DEFAULT_COST: u32 = 10;

/// Longest input bcrypt actually hashes; longer passwords are rejected, not truncated
pub const MAX_PASSWORD_BYTES: usize = 72;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Password hasher backed by the `bcrypt` crate
///
/// Produces `$2b$<cost>$<salt><hash>` digests. Stateless apart from the cost factor,
/// so a single instance can be shared across tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptHasher {
    /// Hasher using [`DEFAULT_COST`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with a custom cost factor
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidCost`] outside 4..=31.
    pub fn with_cost(cost: u32) -> Result<Self, CredentialError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(CredentialError::InvalidCost(cost));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(CredentialError::PasswordTooLong {
                length: plaintext.len(),
                max: MAX_PASSWORD_BYTES,
            });
        }

        ::bcrypt::hash(plaintext, self.cost)
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<(), CredentialError> {
        let matched = ::bcrypt::verify(plaintext, digest)
            .map_err(|e| CredentialError::MalformedDigest(e.to_string()))?;

        // bcrypt ignores everything past 72 bytes; such a password was never hashed here
        if !matched || plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(CredentialError::Mismatch);
        }
        Ok(())
    }
}

const _: fn() = || {
    fn assert_hasher<T: PasswordHasher + 'static>() {
        let _ = |hasher: T| -> Box<dyn PasswordHasher> { Box::new(hasher) };
    }
    assert_hasher::<BcryptHasher>();
};
