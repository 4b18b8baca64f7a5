//! Error types for `RM2BS`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `RM2BS` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Preset Errors ====================
    /// The jslot file is missing or could not be parsed.
    #[error("no valid jslot data at {path}")]
    NoJslotData {
        /// The jslot file that was requested.
        path: PathBuf,
    },

    /// The slider preset destination already exists.
    #[error("slider preset already exists: {path}")]
    OutputExists {
        /// The existing destination path.
        path: PathBuf,
    },

    /// Scaling a morph value left the decimal range.
    #[error("slider value out of range for morph '{morph}'")]
    SliderValueOverflow {
        /// Name of the morph whose value overflowed.
        morph: String,
    },

    /// A `size` attribute other than `small` or `big`.
    #[error("invalid slider size '{0}' (expected small or big)")]
    InvalidSliderSize(String),

    // ==================== Parsing Errors ====================
    /// XML parsing or writing error.
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// Structurally invalid document.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io(err.error)
    }
}

/// A specialized Result type for `RM2BS` operations.
pub type Result<T> = std::result::Result<T, Error>;
