//! # Icicle Errors
//!
//! Error types for icicle generation.

use crate::settings::ApplyScope;
use thiserror::Error;

/// Result type for icicle generation.
pub type IcicleResult<T> = Result<T, IcicleError>;

/// Errors that abort a generation run.
///
/// Any of these leaves the host mesh untouched.
#[derive(Debug, Error)]
pub enum IcicleError {
    /// The host has no mesh object to edit
    #[error("No active mesh: select a mesh in edit mode")]
    NoActiveMesh,

    /// The host mesh is not in edit mode
    #[error("Mesh is not in edit mode")]
    NotEditMode,

    /// Edge resolution produced nothing to work on
    #[error("No edges to process (scope: {scope:?})")]
    NoEdges { scope: ApplyScope },

    /// A configuration value is out of bounds
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    /// The host refused the generated geometry
    #[error("Commit failed: {0}")]
    CommitFailed(#[from] HostError),

    /// A center-line that cannot be meshed
    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    /// Ring vertex count below the polygon minimum
    #[error("Ring needs at least {min} vertices, got {actual}")]
    TooFewRingVertices { min: usize, actual: usize },
}

impl IcicleError {
    /// Creates an invalid path error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }
}

/// A configuration value outside its accepted bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// Value outside its inclusive range
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Lower bound of a pair exceeds the upper bound
    #[error("{field}: min {min} is greater than max {max}")]
    InvertedBounds {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

impl SettingsError {
    /// Creates an out-of-range error.
    pub fn out_of_range(field: &'static str, value: f64, range: (f64, f64)) -> Self {
        Self::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        }
    }

    /// Creates an inverted bounds error.
    pub fn inverted(field: &'static str, min: f64, max: f64) -> Self {
        Self::InvertedBounds { field, min, max }
    }
}

/// Failures reported by the edit-mode host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// History recording is unavailable
    #[error("Undo push failed: {message}")]
    UndoUnavailable { message: String },

    /// The host rejected the mesh update
    #[error("Host rejected update: {message}")]
    Rejected { message: String },
}

impl HostError {
    /// Creates an undo unavailable error.
    pub fn undo_unavailable(message: impl Into<String>) -> Self {
        Self::UndoUnavailable {
            message: message.into(),
        }
    }

    /// Creates a rejected update error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
