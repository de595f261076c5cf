//! dicomplot-io: DICOM RT Ion Plan reading for dicomplot.
//!
//! This crate opens plan files with dicom-object and turns their beam
//! and control point sequences into [`dicomplot_core::PlanMaps`].
//!

mod error;
pub mod extract;
mod reader;

pub use error::{Error, Result};
pub use extract::{extract_plan, extract_spot_map};
pub use reader::{open_plan, read_plan};
