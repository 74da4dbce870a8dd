//! Persistence gateway
//!
//! The only code that reads or writes the encrypted blob and the setup flag.
//! Callers hand in plaintext [`AppData`] and a password; the gateway derives a
//! fresh key for every save and stores a single opaque token.
//!
//! Cryptographic failures are collapsed into [`VaultError::LoadFailed`] and
//! [`VaultError::ImportFailed`]. A wrong password, a truncated token and a
//! tampered ciphertext are indistinguishable from outside.

use tracing::{debug, info, warn};

use super::kv::KeyValueStore;
use crate::crypto::{self, Password};
use crate::error::{VaultError, VaultResult};
use crate::models::AppData;

/// Storage key holding the encrypted blob
pub const DATA_KEY: &str = "expense_tracker_data";

/// Storage key holding the setup flag
pub const SETUP_KEY: &str = "expense_tracker_setup";

const SETUP_VALUE: &str = "true";

/// Encrypted persistence over a key-value store
///
/// Mutating operations take `&mut self`; share a gateway between threads
/// behind a `Mutex` so concurrent saves cannot interleave.
#[derive(Debug)]
pub struct PersistenceGateway<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    /// Create a gateway over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Whether a password has ever been established
    pub fn is_setup(&self) -> VaultResult<bool> {
        Ok(self.store.get(SETUP_KEY)?.as_deref() == Some(SETUP_VALUE))
    }

    /// Encrypt and store `data`, replacing whatever was stored before
    ///
    /// Data that would not load back (a NaN or infinite amount) is rejected
    /// before anything is written.
    pub fn save(&mut self, data: &AppData, password: &Password) -> VaultResult<()> {
        data.check_amounts()?;
        let json = data.to_canonical_json()?;
        let token = crypto::encrypt_string(&json, password).map_err(|e| {
            warn!("Encryption failed during save: {}", e);
            VaultError::SaveFailed
        })?;

        self.store.set(DATA_KEY, &token)?;
        if !self.is_setup()? {
            self.mark_setup()?;
        }

        debug!(
            expenses = data.expenses.len(),
            budgets = data.budgets.len(),
            token_len = token.len(),
            "Saved encrypted data"
        );
        Ok(())
    }

    /// Load and decrypt the stored data
    ///
    /// With nothing stored this returns empty data without touching the
    /// cipher, whatever the password.
    pub fn load(&self, password: &Password) -> VaultResult<AppData> {
        let Some(token) = self.store.get(DATA_KEY)? else {
            debug!("No stored data, starting empty");
            return Ok(AppData::empty());
        };

        let data = decrypt_app_data(&token, password).ok_or(VaultError::LoadFailed)?;
        debug!(expenses = data.expenses.len(), "Loaded encrypted data");
        Ok(data)
    }

    /// Start a session: decrypt the stored data with `password`
    ///
    /// Same as [`load`](Self::load). A failure is presented to the user as an
    /// incorrect password and can be retried without any lockout.
    pub fn unlock(&self, password: &Password) -> VaultResult<AppData> {
        let data = self.load(password)?;
        info!("Unlocked");
        Ok(data)
    }

    /// Check a password against the stored data
    ///
    /// Returns true when nothing is stored yet.
    pub fn verify_password(&self, password: &Password) -> VaultResult<bool> {
        match self.load(password) {
            Ok(_) => Ok(true),
            Err(VaultError::LoadFailed) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Establish the first password by storing empty data
    pub fn setup(&mut self, password: &Password, confirmation: &Password) -> VaultResult<()> {
        if self.is_setup()? {
            return Err(VaultError::AlreadySetup);
        }
        password.validate_new(confirmation)?;
        self.save(&AppData::empty(), password)?;
        info!("Password set up");
        Ok(())
    }

    /// The stored token, verbatim
    pub fn export_blob(&self) -> VaultResult<String> {
        let token = self.store.get(DATA_KEY)?.ok_or(VaultError::NothingToExport)?;
        debug!(token_len = token.len(), "Exported encrypted data");
        Ok(token)
    }

    /// Replace the stored data with an exported token
    ///
    /// The token must decrypt under `password` and hold valid data; otherwise
    /// the current blob is left untouched.
    pub fn import_blob(&mut self, token: &str, password: &Password) -> VaultResult<()> {
        let token = token.trim();
        let data = decrypt_app_data(token, password).ok_or_else(|| {
            warn!("Rejected import that did not decrypt");
            VaultError::ImportFailed
        })?;

        self.store.set(DATA_KEY, token)?;
        self.mark_setup()?;

        info!(expenses = data.expenses.len(), "Imported encrypted data");
        Ok(())
    }

    /// Delete the blob and the setup flag
    ///
    /// Idempotent. Only an I/O failure of the underlying store can surface.
    pub fn wipe(&mut self) -> VaultResult<()> {
        self.store.remove(DATA_KEY)?;
        self.store.remove(SETUP_KEY)?;
        info!("Wiped all stored data");
        Ok(())
    }

    fn mark_setup(&mut self) -> VaultResult<()> {
        self.store.set(SETUP_KEY, SETUP_VALUE)
    }
}

/// Decrypt and parse a token, discarding the reason for any failure
fn decrypt_app_data(token: &str, password: &Password) -> Option<AppData> {
    let json = match crypto::decrypt_string(token, password) {
        Ok(json) => json,
        Err(e) => {
            debug!("Decryption failed: {}", e);
            return None;
        }
    };

    match AppData::from_json(&json) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!("Decrypted payload is not valid data: {}", e);
            None
        }
    }
}
