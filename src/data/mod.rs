//! Data layer - Static mappings and constants
//!
//! This module contains the static data used for LaTeX table rendering:
//! - CSS length unit conversion factors

pub mod units;

// Re-export commonly used items
pub use units::{px_factor, PX_PER_UNIT};
