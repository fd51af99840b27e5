// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An object or stream resource is absent from the active bundle/culture pair.
    ResourceNotFound { key: String, culture: String },

    /// No resource bundle could be located for the given name.
    BundleNotFound(String),

    /// A culture tag could not be parsed as a language identifier.
    InvalidCulture(String),

    /// A resource file exists but could not be parsed.
    Parse(String),

    Io(String),
    Config(String),
}

impl Error {
    pub(crate) fn resource_not_found(key: &str, culture: impl fmt::Display) -> Self {
        Error::ResourceNotFound {
            key: key.to_string(),
            culture: culture.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ResourceNotFound { key, culture } => {
                write!(f, "Resource not found: '{}' (culture {})", key, culture)
            }
            Error::BundleNotFound(name) => write!(f, "Resource bundle not found: {}", name),
            Error::InvalidCulture(tag) => write!(f, "Invalid culture: {}", tag),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
