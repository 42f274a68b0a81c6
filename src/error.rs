//! Crate error type
//!
//! The simulation itself never fails; errors come from the collaborators
//! around it (renderer, settings files).

/// Errors surfaced by the driver, renderer and settings loader
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Renderer rejected a scene operation
    #[error("Render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings parsed but are out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;
