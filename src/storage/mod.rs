//! Storage layer for Expense Vault
//!
//! A flat key-value store holds exactly two entries: the encrypted data token
//! and the setup flag. [`PersistenceGateway`] is the only code that reads or
//! writes them.

pub mod file_io;
pub mod gateway;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use gateway::{PersistenceGateway, DATA_KEY, SETUP_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use crate::config::paths::VaultPaths;
use crate::error::VaultResult;

/// Open the file-backed gateway under the configured data directory
pub fn open_file_gateway(paths: &VaultPaths) -> VaultResult<PersistenceGateway<FileStore>> {
    paths.ensure_directories()?;
    let store = FileStore::open(paths.store_file())?;
    Ok(PersistenceGateway::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_gateway() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VaultPaths::with_base_dir(temp_dir.path().to_path_buf());
        let gateway = open_file_gateway(&paths).unwrap();

        assert!(temp_dir.path().exists());
        assert!(!gateway.is_setup().unwrap());
        assert_eq!(gateway.store().path(), paths.store_file());
    }
}
