use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    Validation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Two point sets that must be interpolated index by index differ in size.
    #[error("point count mismatch: expected {expected}, found {found}")]
    PointCountMismatch { expected: usize, found: usize },

    #[error("shape cycle is empty")]
    EmptyShapeCycle,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
