//! dicomplot-core: Core types for proton therapy spot map viewing.
//!
//! This crate provides the plan data model (spot maps, fields, plans),
//! the shared weight scale used for rendering, and the field/layer
//! navigation state machine.
//!

pub mod error;
pub mod navigation;
pub mod normalization;
pub mod plan;
pub mod spot;

pub use error::{Error, Result};
pub use navigation::{NavAction, PlanShape, ViewState};
pub use normalization::{global_max_weight, WeightScale};
pub use plan::{Field, PlanMaps};
pub use spot::{Energy, Spot, SpotMap, MM_PER_CM};
