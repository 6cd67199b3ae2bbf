//! Month grid layout and keyboard navigation for date pickers.
//!
//! Features:
//! - Month grids aligned to a Sunday, Monday or Saturday week start
//! - Arrow-key focus movement that crosses month boundaries by column
//! - Single, multiple and range selection
//! - Plain or colored text rendering of the picker state

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod keymap;
pub mod navigation;
pub mod picker;
pub mod selection;
pub mod types;
