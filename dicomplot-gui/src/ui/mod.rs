//! UI rendering modules.
//!
//! Contains the UI rendering logic split into separate modules:
//! - `info_bar`: Top bar with plan, field and layer details
//! - `nav_bar`: Bottom bar with the field/layer navigation buttons
//! - `colorbar`: Right panel with the weight color scale
//! - `spot_plot`: Central panel with the spot map scatter plot

mod colorbar;
mod info_bar;
mod nav_bar;
mod spot_plot;
pub mod theme;
