//! Encrypted blob token codec
//!
//! The persisted and exported representation is
//! `base64(salt[16] || nonce[12] || ciphertext)`. There is no header and no
//! version byte; the layout is fixed.

use base64::{engine::general_purpose::STANDARD, Engine};

use super::encryption::{NonceBytes, NONCE_LEN};
use super::key_derivation::{Salt, SALT_LEN};
use super::CryptoError;

/// Minimum decoded token length (salt plus nonce)
pub const HEADER_LEN: usize = SALT_LEN + NONCE_LEN;

/// The decoded parts of a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    pub salt: Salt,
    pub nonce: NonceBytes,
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    pub fn new(salt: Salt, nonce: NonceBytes, ciphertext: Vec<u8>) -> Self {
        Self {
            salt,
            nonce,
            ciphertext,
        }
    }

    /// Encode as a printable token
    pub fn pack(&self) -> String {
        let mut combined = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        combined.extend_from_slice(&self.salt);
        combined.extend_from_slice(&self.nonce);
        combined.extend_from_slice(&self.ciphertext);
        STANDARD.encode(combined)
    }

    /// Decode a token produced by [`EncryptedBlob::pack`]
    ///
    /// Surrounding whitespace is ignored so that tokens read back from export
    /// files with a trailing newline still decode. Authenticity is not checked.
    pub fn unpack(token: &str) -> Result<Self, CryptoError> {
        let combined = STANDARD
            .decode(token.trim())
            .map_err(|e| CryptoError::MalformedToken(format!("invalid base64: {}", e)))?;

        if combined.len() < HEADER_LEN {
            return Err(CryptoError::MalformedToken(format!(
                "token too short: {} bytes, need at least {}",
                combined.len(),
                HEADER_LEN
            )));
        }

        let (salt, rest) = combined.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        let mut blob = Self {
            salt: [0u8; SALT_LEN],
            nonce: [0u8; NONCE_LEN],
            ciphertext: ciphertext.to_vec(),
        };
        blob.salt.copy_from_slice(salt);
        blob.nonce.copy_from_slice(nonce);
        Ok(blob)
    }
}

/// Pack salt, nonce and ciphertext into a token
pub fn pack(salt: &Salt, nonce: &NonceBytes, ciphertext: &[u8]) -> String {
    EncryptedBlob::new(*salt, *nonce, ciphertext.to_vec()).pack()
}

/// Split a token back into salt, nonce and ciphertext
pub fn unpack(token: &str) -> Result<EncryptedBlob, CryptoError> {
    EncryptedBlob::unpack(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let salt = [1u8; SALT_LEN];
        let nonce = [2u8; NONCE_LEN];
        let token = pack(&salt, &nonce, &[3, 4, 5]);

        let raw = STANDARD.decode(&token).unwrap();
        assert_eq!(raw.len(), HEADER_LEN + 3);
        assert_eq!(&raw[..SALT_LEN], &salt);
        assert_eq!(&raw[SALT_LEN..HEADER_LEN], &nonce);
        assert_eq!(&raw[HEADER_LEN..], &[3, 4, 5]);
    }

    #[test]
    fn test_unpack_splits_fields() {
        let blob = EncryptedBlob::new([9u8; SALT_LEN], [8u8; NONCE_LEN], vec![7; 20]);
        let unpacked = unpack(&blob.pack()).unwrap();
        assert_eq!(unpacked, blob);
    }

    #[test]
    fn test_header_only_token_is_accepted() {
        let token = STANDARD.encode([0u8; HEADER_LEN]);
        let blob = unpack(&token).unwrap();
        assert!(blob.ciphertext.is_empty());
    }

    #[test]
    fn test_short_token_is_malformed() {
        let token = STANDARD.encode([0u8; HEADER_LEN - 1]);
        assert!(matches!(unpack(&token), Err(CryptoError::MalformedToken(_))));
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        assert!(matches!(
            unpack("not base64 at all!!"),
            Err(CryptoError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_empty_token_is_malformed() {
        assert!(matches!(unpack(""), Err(CryptoError::MalformedToken(_))));
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        let blob = EncryptedBlob::new([4u8; SALT_LEN], [5u8; NONCE_LEN], vec![6; 4]);
        let token = format!("{}\n", blob.pack());
        assert_eq!(unpack(&token).unwrap(), blob);
    }
}
