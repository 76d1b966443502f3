use sparkstream_core::ViewState;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudioError {
    #[error("no user is logged in")]
    NotLoggedIn,

    /// The admin login is a fixed-pair simulation, not real authentication.
    #[error("invalid admin credentials")]
    InvalidAdminCredentials,

    #[error("view {0:?} is not available to the current user")]
    ViewNotAllowed(ViewState),

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("unsupported platform: {0}")]
    UnknownPlatform(String),

    #[error("no {kind} at index {index}")]
    NoSuchItem { kind: &'static str, index: usize },
}
