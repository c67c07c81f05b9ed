/// Errors produced by launcher operations.
///
/// Capability denials and stale grant callbacks are deliberately not
/// errors: a denial degrades the session and a stale callback is
/// discarded.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("bootstrap already ran for this launcher")]
    AlreadyBootstrapped,

    #[error("launcher was torn down")]
    TornDown,
}

pub type Result<T> = std::result::Result<T, LaunchError>;
