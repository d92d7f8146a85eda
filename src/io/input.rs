use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Trait for reading candidate descriptor paths
#[async_trait]
pub trait InputReader: Send + Sync {
    async fn read_paths(&self) -> Result<Vec<String>>;
}

/// Keep non-blank lines, trimmed
fn collect_paths<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`collect_paths`], but `#` starts a comment line
fn collect_listed_paths<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    collect_paths(lines.filter(|line| !line.trim_start().starts_with('#')))
}

/// Reader that reads from standard input
pub struct StdinReader;

impl StdinReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputReader for StdinReader {
    async fn read_paths(&self) -> Result<Vec<String>> {
        let stdin = io::stdin();
        let mut lines = Vec::new();

        for line in stdin.lock().lines() {
            lines.push(line.context("Failed to read line from stdin")?);
        }

        Ok(collect_listed_paths(lines.iter().map(String::as_str)))
    }
}

/// Reader that reads from a file
pub struct FileReader {
    file_path: PathBuf,
}

impl FileReader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

#[async_trait]
impl InputReader for FileReader {
    async fn read_paths(&self) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.file_path)
            .await
            .with_context(|| format!("Failed to read file: {}", self.file_path.display()))?;

        Ok(collect_listed_paths(content.lines()))
    }
}

/// Reader that takes paths from a vector (command-line arguments, tests)
pub struct VecReader {
    paths: Vec<String>,
}

impl VecReader {
    pub fn new(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl InputReader for VecReader {
    async fn read_paths(&self) -> Result<Vec<String>> {
        Ok(collect_paths(self.paths.iter().map(String::as_str)))
    }
}
