//! CSS length unit conversion factors
//!
//! This module provides the static unit-to-pixel factor table used by the
//! length conversion pipeline. The factors follow the CSS reference pixel
//! (96px per inch) plus the EMU and em conventions used by office formats
//! and browser defaults.

use phf::phf_map;

/// Pixels per unit for each recognized CSS length unit
///
/// A bare number is treated as already being in pixels.
pub static PX_PER_UNIT: phf::Map<&'static str, f64> = phf_map! {
    "px" => 1.0,
    "pt" => 4.0 / 3.0,
    "in" => 96.0,
    "cm" => 37.7952755906,
    "emu" => 1.0 / 9525.0,
    "em" => 16.0,
};

/// Look up the pixel conversion factor for a unit token
pub fn px_factor(unit: &str) -> Option<f64> {
    PX_PER_UNIT.get(unit).copied()
}
