use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    #[error("Test failed {0}: {1}")]
    Failed(String, String),
    #[error("Failed to decode encoded value")]
    DecodingError,
    #[error("Expected a {expected}-byte digest, got {actual} bytes")]
    DigestLength { expected: usize, actual: usize },
    #[error("Malformed transaction record on line {0}: {1}")]
    MalformedRecord(usize, String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
