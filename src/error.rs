use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("No source path set. Example: \"--src=/path/to/source/files\"")]
    MissingSourcePath,

    #[error("Source path does not exist: {0}")]
    SourceNotFound(PathBuf),

    #[error("failed to prepare destination {path}: {source}")]
    DestinationSetup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid discovery pattern: {0}")]
    Discovery(#[from] glob::PatternError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
