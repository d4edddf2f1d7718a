use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while applying a grid to the host document.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured container id did not resolve to an element.
    #[error("container not found: #{id}")]
    ContainerNotFound { id: String },
}
