//! Secure handling of the session password
//!
//! The password is never persisted. This wrapper zeroes its buffer on drop
//! and keeps it out of Debug and Display output.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

use crate::error::{VaultError, VaultResult};

/// Minimum length for a newly chosen password, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// A password that zeros its contents on drop
pub struct Password {
    inner: Zeroizing<String>,
}

impl Password {
    /// Wrap a password
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            inner: Zeroizing::new(s.into()),
        }
    }

    /// Get the password contents
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Check a newly chosen password against the setup policy
    ///
    /// Only used when establishing a password. Unlocking accepts any input and
    /// lets decryption decide.
    pub fn validate_new(&self, confirmation: &Password) -> VaultResult<()> {
        if self.char_count() < MIN_PASSWORD_LEN {
            return Err(VaultError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }

        if self.as_str() != confirmation.as_str() {
            return Err(VaultError::PasswordMismatch);
        }

        Ok(())
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.inner.as_str()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.inner.as_str()
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Password {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}
