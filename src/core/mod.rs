//! Core rendering modules
//!
//! This module contains the LaTeX width-derivation pipeline:
//! - `length`: CSS length classification and unit conversion
//! - `width`: per-column width resolution and table width synthesis
//! - `statements`: side-margin, font-size and wrapper statements
//! - `render`: component contract and document-fragment assembly

pub mod length;
pub mod render;
pub mod statements;
pub mod width;

// Re-export main types and functions
pub use length::{
    convert_to_pt, convert_to_px, css_length_has_supported_units, is_css_length_string,
    is_number_without_units, units_from_length_string, LengthValue, Unit,
};
pub use render::{render_latex, render_latex_with, EmptyComponents, LatexComponents};
pub use statements::{fontsize_statement, table_width_statement, wrap_end, wrap_start};
pub use width::{ColumnWidth, ColumnWidthSpec, TableWidthPolicy, WidthTable};
