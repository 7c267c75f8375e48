use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem storage. Paths are used as given; parent directories are
/// created on write so the output directory need not exist up front.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data)?;
        Ok(())
    }
}
