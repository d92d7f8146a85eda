use std::fmt;

/// Structured error types for the version-excludes tool
#[derive(Debug)]
pub enum VersionExcludesError {
    /// Configuration related errors
    Config {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// Input/Output related errors (reading path lists, metadata lookups, etc.)
    Io {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// Path processing related errors (scan roots, exclusion patterns)
    PathProcessing {
        message: String,
        path: Option<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl fmt::Display for VersionExcludesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionExcludesError::Config { message, .. } => {
                write!(f, "Configuration error: {}", message)
            }
            VersionExcludesError::Io { message, .. } => {
                write!(f, "I/O error: {}", message)
            }
            VersionExcludesError::PathProcessing { message, path, .. } => {
                if let Some(path) = path {
                    write!(f, "Path processing error for '{}': {}", path, message)
                } else {
                    write!(f, "Path processing error: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for VersionExcludesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VersionExcludesError::Config { source, .. }
            | VersionExcludesError::Io { source, .. }
            | VersionExcludesError::PathProcessing { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
        }
    }
}

impl VersionExcludesError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a path processing error
    pub fn path_processing<S: Into<String>, P: Into<String>>(message: S, path: Option<P>) -> Self {
        Self::PathProcessing {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Create a path processing error with source
    pub fn path_processing_with_source<
        S: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        path: Option<P>,
        source: E,
    ) -> Self {
        Self::PathProcessing {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for VersionExcludesError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionExcludesError>;

/// Extension trait to add context to errors
pub trait ErrorContext<T> {
    fn context_io<S: Into<String>>(self, message: S) -> Result<T>;
    fn context_path<S: Into<String>, P: Into<String>>(self, message: S, path: P) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context_io<S: Into<String>>(self, message: S) -> Result<T> {
        self.map_err(|e| VersionExcludesError::io_with_source(message, e))
    }

    fn context_path<S: Into<String>, P: Into<String>>(self, message: S, path: P) -> Result<T> {
        self.map_err(|e| VersionExcludesError::path_processing_with_source(message, Some(path), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_path_processing() {
        let err = VersionExcludesError::path_processing("Scan root does not exist", Some("/nowhere"));
        assert_eq!(
            err.to_string(),
            "Path processing error for '/nowhere': Scan root does not exist"
        );

        let err = VersionExcludesError::path_processing::<_, String>("Bad pattern", None);
        assert_eq!(err.to_string(), "Path processing error: Bad pattern");
    }

    #[test]
    fn test_context_io_keeps_source() {
        let failed: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        let err = failed.context_io("Failed to read path list").unwrap_err();
        assert_eq!(err.to_string(), "I/O error: Failed to read path list");
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_display_config() {
        let err = VersionExcludesError::config("Descriptor name cannot be empty");
        assert_eq!(err.to_string(), "Configuration error: Descriptor name cannot be empty");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: VersionExcludesError = io.into();
        assert!(matches!(err, VersionExcludesError::Io { .. }));
    }
}
