//! Feature modules - Table configuration surface
//!
//! This module contains the user-facing table configuration API:
//! - Boxhead (column metadata) and column operations
//! - The table context and options
//! - Cell format function registrations
//! - Text transform registrations

pub mod boxhead;
pub mod formats;
pub mod table;
pub mod transforms;

// Re-export commonly used types
pub use boxhead::{Boxhead, ColumnAlignment, ColumnInfo, ColumnType};
pub use formats::{FormatFn, FormatFns, FormatInfo, RenderContext};
pub use table::{Table, TableOptions};
pub use transforms::{TextTransformFn, TextTransformFns, TextTransformInfo};
