use crate::core::{Result, VersionExcludesError};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DESCRIPTOR_NAME: &str = "pom.xml";

/// Configuration for the exclusion tool
#[derive(Debug, Clone)]
pub struct Config {
    /// Checkout root that list entries are relative to
    pub root: PathBuf,
    /// File name of the project descriptors to look for
    pub descriptor_name: String,
    /// Whether to show progress during operations
    pub show_progress: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    root: Option<PathBuf>,
    descriptor_name: Option<String>,
    show_progress: bool,
}

impl ConfigBuilder {
    pub fn root(mut self, path: Option<&str>, try_env: bool) -> Self {
        if let Some(p) = path {
            if !p.trim().is_empty() {
                self.root = Some(PathBuf::from(p.trim()));
                return self;
            }
        }
        if try_env {
            if let Ok(env_root) = env::var("VERSION_EXCLUDES_ROOT") {
                if !env_root.trim().is_empty() {
                    self.root = Some(PathBuf::from(env_root.trim()));
                }
            }
        }
        self
    }

    pub fn descriptor_name(mut self, name: Option<&str>, try_env: bool) -> Self {
        if let Some(n) = name {
            self.descriptor_name = Some(n.to_string());
            return self;
        }
        if try_env {
            if let Ok(env_name) = env::var("VERSION_EXCLUDES_DESCRIPTOR") {
                self.descriptor_name = Some(env_name.trim().to_string());
            }
        }
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn build(self) -> Result<Config> {
        let descriptor_name = self
            .descriptor_name
            .unwrap_or_else(|| DEFAULT_DESCRIPTOR_NAME.to_string())
            .trim()
            .to_string();
        if descriptor_name.is_empty() {
            return Err(VersionExcludesError::config("Descriptor name cannot be empty"));
        }
        if descriptor_name.contains(['/', '\\']) {
            return Err(VersionExcludesError::config(format!(
                "Descriptor name must be a bare file name, got '{}'",
                descriptor_name
            )));
        }

        Ok(Config {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            descriptor_name,
            show_progress: self.show_progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = Config::builder().build().unwrap();

        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.descriptor_name, "pom.xml");
        assert!(!config.show_progress);
    }

    #[test]
    fn test_config_with_custom_values() {
        let config = Config::builder()
            .root(Some("/srv/checkout"), false)
            .descriptor_name(Some("build.xml"), false)
            .show_progress(true)
            .build()
            .expect("Failed to create custom config");

        assert_eq!(config.root, PathBuf::from("/srv/checkout"));
        assert_eq!(config.descriptor_name, "build.xml");
        assert!(config.show_progress);
    }

    #[test]
    fn test_invalid_descriptor_name() {
        let err = Config::builder()
            .descriptor_name(Some("  "), false)
            .build()
            .unwrap_err();
        assert!(matches!(err, VersionExcludesError::Config { .. }));
        assert!(
            Config::builder()
                .descriptor_name(Some("sub/pom.xml"), false)
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_config_from_env() {
        unsafe {
            env::set_var("VERSION_EXCLUDES_ROOT", "env-checkout");
            env::set_var("VERSION_EXCLUDES_DESCRIPTOR", "ivy.xml");
        }

        let config = Config::builder()
            .root(None, true)
            .descriptor_name(None, true)
            .build()
            .expect("Failed to create config from environment");

        assert_eq!(config.root, PathBuf::from("env-checkout"));
        assert_eq!(config.descriptor_name, "ivy.xml");

        // Explicit values win over the environment
        let config = Config::builder()
            .root(Some("explicit"), true)
            .descriptor_name(Some("pom.xml"), true)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("explicit"));
        assert_eq!(config.descriptor_name, "pom.xml");

        unsafe {
            env::remove_var("VERSION_EXCLUDES_ROOT");
            env::remove_var("VERSION_EXCLUDES_DESCRIPTOR");
        }
    }
}
