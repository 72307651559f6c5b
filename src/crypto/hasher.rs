//! Password hashing capability

use crate::domain::CredentialError;

/// One-way password hashing with self-describing digests
///
/// Digests embed the algorithm, cost and salt, so [`verify`](PasswordHasher::verify)
/// needs nothing but the stored string.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `plaintext` with a fresh random salt
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::PasswordTooLong`] if the input exceeds the
    /// algorithm's limit, or [`CredentialError::HashingFailed`] if the primitive
    /// rejects it for another reason.
    fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// Check `plaintext` against a stored digest
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Mismatch`] for a wrong password and
    /// [`CredentialError::MalformedDigest`] if `digest` is not a valid digest.
    fn verify(&self, plaintext: &str, digest: &str) -> Result<(), CredentialError>;
}
