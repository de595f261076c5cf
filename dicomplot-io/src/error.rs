//! I/O error types.

use dicom_core::value::ConvertValueError;
use thiserror::Error;

/// Result type for plan reading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Plan reading and extraction errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened or parsed as DICOM.
    #[error("failed to read DICOM file: {0}")]
    Read(#[from] dicom_object::ReadError),

    /// A required sequence is absent.
    #[error("missing sequence {name}")]
    MissingSequence { name: &'static str },

    /// A sequence is shorter than the requested index.
    #[error("{name} has no item {index} (only {len} items)")]
    MissingItem {
        name: &'static str,
        index: usize,
        len: usize,
    },

    /// A required attribute of a control point is absent.
    #[error("beam {beam}, control point {control_point}: missing {name}")]
    MissingAttribute {
        beam: usize,
        control_point: usize,
        name: &'static str,
    },

    /// An attribute value has the wrong representation.
    #[error("beam {beam}, control point {control_point}: cannot convert {name}: {source}")]
    Convert {
        beam: usize,
        control_point: usize,
        name: &'static str,
        #[source]
        source: ConvertValueError,
    },

    /// A decimal string does not hold a number.
    #[error("beam {beam}, control point {control_point}: {name} is not a number: {value:?}")]
    InvalidNumber {
        beam: usize,
        control_point: usize,
        name: &'static str,
        value: String,
    },

    /// Positions and weights of a layer do not line up.
    #[error("beam {beam}, control point {control_point}: {source}")]
    InvalidLayer {
        beam: usize,
        control_point: usize,
        #[source]
        source: dicomplot_core::Error,
    },

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] dicomplot_core::Error),
}
