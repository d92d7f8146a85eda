use crate::core::{Result, VersionExcludesError};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// Trait for checking whether list entries exist in a checkout
#[async_trait]
pub trait PathValidator: Send + Sync {
    /// Validate if a path exists and is accessible
    async fn validate(&self, path: &Path) -> Result<bool>;

    /// Entries that do not exist under `root`, in input order
    async fn stale_entries(&self, root: &Path, entries: &[String]) -> Result<Vec<String>> {
        let mut stale = Vec::new();

        for entry in entries {
            if !self.validate(&root.join(entry)).await? {
                stale.push(entry.clone());
            }
        }

        Ok(stale)
    }

    fn description(&self) -> &'static str;
}

/// File system-based path validator
pub struct FileSystemValidator;

impl FileSystemValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PathValidator for FileSystemValidator {
    async fn validate(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(VersionExcludesError::path_processing_with_source(
                "Failed to validate path",
                Some(path.to_string_lossy().to_string()),
                e,
            )),
        }
    }

    fn description(&self) -> &'static str {
        "File system validator (checks that each entry is an existing file)"
    }
}
