//! Error types for the wavefield engine

use thiserror::Error;

use crate::params::ColorParseError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Fatal errors: the host has to rebuild the engine to recover
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to create surface: {0}")]
    Surface(String),

    #[error("No suitable GPU adapter found")]
    NoAdapter,

    #[error("Failed to request device: {0}")]
    Device(String),

    #[error("GPU device lost: {0}")]
    DeviceLost(String),

    #[error("GPU out of memory")]
    OutOfMemory,

    #[error("Invalid camera library: {0}")]
    Library(#[from] LibraryError),

    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),

    #[error("Frame capture failed: {0}")]
    Capture(String),
}

/// Problems found while validating the preset and motion tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    #[error("Duplicate entry name: {0}")]
    DuplicateName(&'static str),

    #[error("{0}: duration must be positive, got {1}")]
    InvalidDuration(&'static str, f32),

    #[error("{0}: field of view must be within (0, 180) degrees, got {1}")]
    InvalidFov(&'static str, f32),

    #[error("{0}: keyframe contains a non-finite value")]
    NonFinite(&'static str),
}

/// Name lookups that found nothing; state is left untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown camera preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown camera motion: {0}")]
    UnknownMotion(String),
}
