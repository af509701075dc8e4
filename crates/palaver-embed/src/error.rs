//! Mount errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// No element on the page matches the selector
    #[error("No element matches selector '{0}'")]
    ContainerNotFound(String),

    #[error("Invalid widget options: {0}")]
    InvalidOptions(String),

    /// The renderer could not be started in the container
    #[error("Failed to launch widget: {0}")]
    Launch(String),
}

pub type MountResult<T> = Result<T, MountError>;
