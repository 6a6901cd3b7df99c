#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("popup permission denied")]
    PermissionDenied,

    #[error("popups not supported")]
    Unsupported,

    #[error("failed to display popup: {0}")]
    Display(String),
}
