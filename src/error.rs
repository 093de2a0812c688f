use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocFinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path not allowed: {path}")]
    NotAllowed { path: PathBuf },

    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DocFinderError {
    /// Short category label used when printing errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::NotAllowed { .. } => "NotAllowed",
            Self::NotFound { .. } => "NotFound",
            Self::InvalidArgument(_) => "Argument",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// Underlying cause worth showing under the main message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Hint for fixing the error, if there is an obvious one.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NotAllowed { .. } => {
                Some("paths must lie under a configured root; see `docfinder config show`")
            }
            Self::TomlParse(_) => Some("run `docfinder config validate` to check the file"),
            _ => None,
        }
    }

    /// Whether this error is an authorization or existence signal for a
    /// caller-supplied path rather than a failure of the tool itself.
    #[must_use]
    pub const fn is_path_rejection(&self) -> bool {
        matches!(self, Self::NotAllowed { .. } | Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, DocFinderError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
