/// Errors produced by library loading.
///
/// Loading a library that is already in the registry is a no-op, never
/// an error; circular dependency declarations are expected.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load library '{name}': {reason}")]
    LoadFailed { name: String, reason: String },
}

impl LoadError {
    pub fn failed(name: &str, reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// The library whose load failed.
    pub fn library(&self) -> &str {
        match self {
            Self::LoadFailed { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
