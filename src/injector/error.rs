use thiserror::Error;

#[derive(Error, Debug)]
pub enum InjectError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to scan directory {dir}: {source}")]
    Scan {
        dir: String,
        source: walkdir::Error,
    },

    #[error("Character {character:?} in {path} cannot be encoded as Latin-1")]
    Encode { path: String, character: char },

    #[error("Invalid container pattern: {0}")]
    Pattern(#[from] regex::Error),
}
