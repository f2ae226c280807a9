//! Error types for the colorwash core.

use thiserror::Error;

/// Errors produced by fallible construction surfaces.
///
/// The animation engine itself has no fallible operations — numeric edge
/// cases (non-positive delta times, empty color lists, near-zero chroma)
/// are handled by local policy and never surface as errors. This enum only
/// covers parsing, name lookup, and driver-thread startup.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// An I/O-level failure from a driver thread.
    #[error("io error: {0}")]
    Io(String),
}
