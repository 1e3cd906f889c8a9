//! # tabulatex
//!
//! LaTeX rendering core for dataframe-derived presentation tables.
//!
//! ## Features
//!
//! - **Boxhead management**: column labels, alignments, and declared widths
//!   with validated, atomic column operations
//! - **CSS length pipeline**: classification, unit extraction, and px/pt
//!   conversion for `px`, `pt`, `in`, `cm`, `emu`, `em`
//! - **Width derivation**: per-column width contributions folded into a
//!   single LaTeX table-width expression, or flagged indeterminate
//! - **Layout statements**: longtable side margins, `\fontsize`, and table
//!   wrappers
//! - **Format and transform registrations**: per-output-context cell format
//!   functions and text transforms
//!
//! ## Usage Examples
//!
//! ### Width derivation
//!
//! ```rust
//! use tabulatex::{Boxhead, ColumnInfo, Table, WidthTable};
//!
//! let boxhead = Boxhead::from_columns(vec![
//!     ColumnInfo::new("year").with_width("50%"),
//!     ColumnInfo::new("population").with_width("30%"),
//! ]);
//! let table = Table::new(boxhead);
//!
//! let width = WidthTable::resolve(&table.boxhead, &table.options).unwrap();
//! assert_eq!(width.tbl_width.as_deref(), Some("0.8\\linewidth"));
//! ```
//!
//! ### Column operations
//!
//! ```rust
//! use indexmap::IndexMap;
//! use tabulatex::{Boxhead, Table};
//!
//! let mut labels = IndexMap::new();
//! labels.insert("year".to_string(), "Year".to_string());
//!
//! let table = Table::new(Boxhead::from_vars(["year", "population"]))
//!     .cols_label(labels)
//!     .unwrap()
//!     .cols_align("right", Some(&["population"]))
//!     .unwrap();
//!
//! assert_eq!(table.boxhead.get("year").unwrap().label, "Year");
//! ```

/// Core rendering modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules - table configuration surface
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core pipeline functions and types
pub use crate::core::length::{
    convert_to_pt, convert_to_px, css_length_has_supported_units, is_css_length_string,
    is_number_without_units, units_from_length_string, LengthValue, Unit,
};
pub use crate::core::render::{render_latex, render_latex_with, EmptyComponents, LatexComponents};
pub use crate::core::statements::{
    fontsize_statement, table_width_statement, wrap_end, wrap_start,
};
pub use crate::core::width::{ColumnWidth, ColumnWidthSpec, TableWidthPolicy, WidthTable};

// Re-export data modules
pub use crate::data::units::{px_factor, PX_PER_UNIT};

// Re-export the table configuration surface
pub use crate::features::boxhead::{Boxhead, ColumnAlignment, ColumnInfo, ColumnType};
pub use crate::features::formats::{FormatFn, FormatFns, FormatInfo, RenderContext};
pub use crate::features::table::{Table, TableOptions};
pub use crate::features::transforms::{TextTransformFn, TextTransformFns, TextTransformInfo};

// Re-export utilities
pub use crate::utils::error::{RenderError, RenderResult};

/// Resolve the width table for a table configuration snapshot
///
/// # Arguments
/// * `table` - the configuration snapshot
///
/// # Returns
/// The per-column contributions and the synthesized table width
pub fn derive_width_table(table: &Table) -> RenderResult<WidthTable> {
    WidthTable::resolve(&table.boxhead, &table.options)
}
