use crate::core::{ErrorContext, Result, VersionExcludesError};
use crate::processing::exclusions::{normalize_path, DescriptorStatus, ExclusionSet};
use std::path::Path;
use tokio::fs;
use walkdir::{DirEntry, WalkDir};

/// Directories that never contain descriptors worth stamping
const SKIPPED_DIRS: &[&str] = &[".git", ".svn", "target", "node_modules"];

/// A descriptor file found under the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDescriptor {
    /// Normalized path relative to the scan root
    pub path: String,
    pub status: DescriptorStatus,
}

/// Walks a checkout and classifies every project descriptor it finds
pub struct DescriptorScanner<'a> {
    exclusions: &'a ExclusionSet,
    descriptor_name: String,
}

impl<'a> DescriptorScanner<'a> {
    pub fn new(exclusions: &'a ExclusionSet, descriptor_name: impl Into<String>) -> Self {
        Self {
            exclusions,
            descriptor_name: descriptor_name.into(),
        }
    }

    fn is_skipped_dir(entry: &DirEntry) -> bool {
        // depth 0 is the root itself, which is never skipped
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRS.contains(&name))
    }

    /// Scan `root` and report each descriptor through `on_file`.
    /// Results are sorted by path.
    pub async fn scan<F>(&self, root: &Path, mut on_file: F) -> Result<Vec<ScannedDescriptor>>
    where
        F: FnMut(&ScannedDescriptor),
    {
        let root_display = root.to_string_lossy().to_string();
        let metadata = fs::metadata(root)
            .await
            .context_path("Scan root is not accessible", root_display.clone())?;
        if !metadata.is_dir() {
            return Err(VersionExcludesError::path_processing(
                "Scan root is not a directory",
                Some(root_display),
            ));
        }

        let mut found = Vec::new();

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !Self::is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("Warning: Failed to read directory entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != self.descriptor_name.as_str() {
                continue;
            }

            let relative = match entry.path().strip_prefix(root) {
                Ok(relative) => relative,
                Err(_) => continue,
            };
            let path = normalize_path(&relative.to_string_lossy());

            let descriptor = ScannedDescriptor {
                status: self.exclusions.classify(&path),
                path,
            };
            on_file(&descriptor);
            found.push(descriptor);
        }

        found.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(found)
    }
}
