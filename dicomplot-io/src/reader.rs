//! Plan file readers.

use std::path::Path;

use dicom_object::{open_file, DefaultDicomObject};
use dicomplot_core::PlanMaps;
use log::info;

use crate::{extract_plan, Result};

/// Opens and parses a DICOM file.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid DICOM.
pub fn open_plan<P: AsRef<Path>>(path: P) -> Result<DefaultDicomObject> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    Ok(open_file(path)?)
}

/// Reads a plan file and extracts all of its spot maps.
///
/// # Errors
/// Returns an error if the file cannot be read or lacks the expected
/// beam/control point structure.
pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<PlanMaps> {
    let obj = open_plan(path)?;
    extract_plan(&obj)
}
