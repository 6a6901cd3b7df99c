#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("storage unavailable")]
    Unavailable,

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
