//! Cryptographic functions for Expense Vault
//!
//! Provides PBKDF2-HMAC-SHA256 key derivation, AES-256-GCM authenticated
//! encryption and the base64 token format the data is stored in.
//!
//! Every call to [`encrypt_string`] draws a fresh salt and nonce, so no key is
//! ever used for more than one seal.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;
pub mod token;

use thiserror::Error;

pub use encryption::{generate_nonce, open, seal, NonceBytes, NONCE_LEN};
pub use key_derivation::{derive_key, generate_salt, DerivedKey, Salt, PBKDF2_ITERATIONS, SALT_LEN};
pub use secure_memory::{Password, MIN_PASSWORD_LEN};
pub use token::{pack, unpack, EncryptedBlob, HEADER_LEN};

/// Errors raised inside the cryptographic layer
///
/// These never cross the persistence gateway; see [`crate::storage::PersistenceGateway`].
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key derivation rejected its input
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// Authentication tag did not verify
    #[error("Decryption failed: invalid key or corrupted data")]
    AuthenticationFailure,

    /// Token could not be decoded
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Cipher setup or sealing failed
    #[error("Encryption error: {0}")]
    Encryption(String),
}

/// Encrypt a string under a password, returning a packed token
pub fn encrypt_string(plaintext: &str, password: &str) -> Result<String, CryptoError> {
    let salt = generate_salt();
    let nonce = generate_nonce();
    let key = derive_key(password, &salt)?;
    let ciphertext = seal(plaintext.as_bytes(), &key, &nonce)?;
    Ok(pack(&salt, &nonce, &ciphertext))
}

/// Decrypt a packed token with a password
pub fn decrypt_string(token: &str, password: &str) -> Result<String, CryptoError> {
    let blob = unpack(token)?;
    let key = derive_key(password, &blob.salt)?;
    let plaintext = open(&blob.ciphertext, &key, &blob.nonce)?;
    String::from_utf8(plaintext)
        .map_err(|e| CryptoError::MalformedToken(format!("invalid UTF-8 in payload: {}", e)))
}
