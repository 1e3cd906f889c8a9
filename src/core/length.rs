//! CSS length parsing and unit conversion
//!
//! Lengths arrive as CSS-like strings such as `"120px"`, `"3.2in"` or a bare
//! `"42"`. This module classifies those strings, splits them into a numeric
//! magnitude and a unit token, and converts them to pixels or points using
//! the factor table in [`crate::data::units`].
//!
//! Classification predicates never fail; malformed input simply classifies
//! as false or unsupported. Conversion fails only when a unit token outside
//! the recognized set reaches the factor lookup.

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::units::px_factor;
use crate::utils::error::{RenderError, RenderResult};

lazy_static! {
    // A number (digits/dot, no sign, no exponent) followed by an optional
    // run of letters: "96px", "3.23in", "42"
    static ref CSS_LENGTH_PATTERN: Regex = Regex::new(r"^[0-9.]+[a-zA-Z]*$").unwrap();

    // A number with no trailing unit at all
    static ref BARE_NUMBER_PATTERN: Regex = Regex::new(r"^[0-9.]+$").unwrap();

    // Numeric part of a length string, for stripping
    static ref NUMERIC_PART: Regex = Regex::new(r"[0-9.]+").unwrap();

    // Letters and whitespace, for isolating the magnitude
    static ref UNIT_PART: Regex = Regex::new(r"[a-zA-Z\s]").unwrap();
}

/// A recognized CSS length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Pt,
    In,
    Cm,
    Emu,
    Em,
}

impl Unit {
    /// Parse a lowercase unit token into a `Unit`
    pub fn from_token(token: &str) -> RenderResult<Unit> {
        match token {
            "px" => Ok(Unit::Px),
            "pt" => Ok(Unit::Pt),
            "in" => Ok(Unit::In),
            "cm" => Ok(Unit::Cm),
            "emu" => Ok(Unit::Emu),
            "em" => Ok(Unit::Em),
            _ => Err(RenderError::InvalidUnit {
                unit: token.to_string(),
            }),
        }
    }

    /// The token used in CSS length strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Pt => "pt",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Emu => "emu",
            Unit::Em => "em",
        }
    }
}

/// A parsed CSS length: a non-negative magnitude plus a recognized unit
///
/// Parsing happens once at the boundary; downstream width derivation works
/// with this value rather than re-inspecting string suffixes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthValue {
    pub magnitude: f64,
    pub unit: Unit,
}

impl LengthValue {
    /// Parse a CSS length string such as `"3.2in"` or `"120"` (bare numbers
    /// are pixels)
    pub fn parse(length: &str) -> RenderResult<LengthValue> {
        let magnitude = magnitude_from_length_string(length)?;
        let unit = Unit::from_token(&units_from_length_string(length))?;
        Ok(LengthValue { magnitude, unit })
    }

    /// Convert to pixels
    ///
    /// Pixel magnitudes pass through unrounded; every other unit is scaled
    /// and then rounded half-to-even on the final pixel value.
    pub fn to_px(&self) -> f64 {
        match self.unit {
            Unit::Px => self.magnitude,
            _ => {
                // Factor lookup cannot fail for a parsed unit
                let factor = px_factor(self.unit.as_str()).unwrap_or(0.0);
                (self.magnitude * factor).round_ties_even()
            }
        }
    }

    /// Convert to points (1px = 0.75pt)
    pub fn to_pt(&self) -> f64 {
        self.to_px() * 3.0 / 4.0
    }
}

/// Check whether a string looks like a CSS length: a number followed by an
/// optional letters-only unit
pub fn is_css_length_string(x: &str) -> bool {
    CSS_LENGTH_PATTERN.is_match(x)
}

/// Check whether a string is a number with no unit attached
pub fn is_number_without_units(x: &str) -> bool {
    BARE_NUMBER_PATTERN.is_match(x)
}

/// Extract the unit token from a length string like `"123px"` or `"3.23in"`,
/// trimming whitespace and lowercasing; a bare number yields `"px"`
pub fn units_from_length_string(length: &str) -> String {
    let units = NUMERIC_PART.replace_all(length, "");
    let units = units.trim().to_lowercase();

    if units.is_empty() {
        return "px".to_string();
    }

    units
}

/// Check whether a CSS length string carries a supported unit
///
/// Returns false for anything that is not a length string at all. A bare
/// number classifies as `no_units_valid`.
pub fn css_length_has_supported_units(x: &str, no_units_valid: bool) -> bool {
    if !is_css_length_string(x) {
        return false;
    }

    if is_number_without_units(x) {
        return no_units_valid;
    }

    px_factor(&units_from_length_string(x)).is_some()
}

/// Look up the pixel conversion factor for the unit of a length string
///
/// Fails with [`RenderError::InvalidUnit`] when the extracted token is not
/// one of the recognized units.
pub fn px_conversion(length: &str) -> RenderResult<f64> {
    let input_units = units_from_length_string(length);

    if input_units == "px" {
        return Ok(1.0);
    }

    px_factor(&input_units).ok_or(RenderError::InvalidUnit { unit: input_units })
}

fn magnitude_from_length_string(length: &str) -> RenderResult<f64> {
    let numeric = UNIT_PART.replace_all(length, "");
    numeric
        .parse::<f64>()
        .map_err(|_| RenderError::InvalidLength {
            value: length.to_string(),
        })
}

/// Convert a CSS length string to pixels
///
/// Pixel values are returned as-is without rounding; other units are scaled
/// by their factor and rounded half-to-even.
pub fn convert_to_px(length: &str) -> RenderResult<f64> {
    let units = units_from_length_string(length);
    let value = magnitude_from_length_string(length)?;

    if units == "px" {
        return Ok(value);
    }

    let factor = px_conversion(&units)?;

    Ok((value * factor).round_ties_even())
}

/// Convert a CSS length string to points (1px = 0.75pt)
pub fn convert_to_pt(length: &str) -> RenderResult<f64> {
    Ok(convert_to_px(length)? * 3.0 / 4.0)
}
