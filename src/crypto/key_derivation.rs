//! Key derivation using PBKDF2-HMAC-SHA256
//!
//! Derives AES-256 keys from user passwords. Every encryption generates a new
//! salt, so each stored blob is sealed under its own key.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use hmac::Hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::CryptoError;

/// Size of the key derivation salt in bytes
pub const SALT_LEN: usize = 16;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Size of the derived AES-256 key in bytes
const KEY_LEN: usize = 32;

/// Salt bytes for one key derivation
pub type Salt = [u8; SALT_LEN];

/// A derived encryption key
///
/// The key bytes are only visible inside the crypto module and are zeroed on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    pub(super) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Generate a fresh random salt
pub fn generate_salt() -> Salt {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive an encryption key from a password and salt
///
/// Deterministic for a given (password, salt) pair. An empty password is
/// accepted here; length policy belongs to the setup flow.
pub fn derive_key(password: &str, salt: &Salt) -> Result<DerivedKey, CryptoError> {
    let mut key = [0u8; KEY_LEN];

    pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(format!("PBKDF2 failed: {}", e)))?;

    let derived = DerivedKey { key };
    key.zeroize();
    Ok(derived)
}
