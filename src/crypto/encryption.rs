//! AES-256-GCM encryption/decryption
//!
//! Provides authenticated encryption with a 96-bit nonce and no associated
//! data. Callers supply the nonce; [`generate_nonce`] must be used for every
//! seal since reusing a nonce under the same key is not detectable here.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};

use super::{CryptoError, DerivedKey};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext
pub const TAG_LEN: usize = 16;

/// Nonce bytes for one seal/open
pub type NonceBytes = [u8; NONCE_LEN];

/// Generate a fresh random nonce
pub fn generate_nonce() -> NonceBytes {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

fn cipher_for(key: &DerivedKey) -> Result<Aes256Gcm, CryptoError> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(format!("Failed to create cipher: {}", e)))
}

/// Encrypt plaintext, returning ciphertext with the authentication tag appended
pub fn seal(plaintext: &[u8], key: &DerivedKey, nonce: &NonceBytes) -> Result<Vec<u8>, CryptoError> {
    let cipher = cipher_for(key)?;
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| CryptoError::Encryption(format!("Encryption failed: {}", e)))
}

/// Decrypt and verify ciphertext
///
/// A wrong key, wrong nonce and tampered ciphertext all fail the same way.
pub fn open(ciphertext: &[u8], key: &DerivedKey, nonce: &NonceBytes) -> Result<Vec<u8>, CryptoError> {
    let cipher = cipher_for(key)?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailure)
}
