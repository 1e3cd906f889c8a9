//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Number formatting for LaTeX dimension output

pub mod error;
pub mod numfmt;

// Re-export commonly used items
pub use error::{RenderError, RenderResult};
pub use numfmt::format_num;
