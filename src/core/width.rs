//! Column width resolution and table width synthesis
//!
//! Each column may declare a width as a percentage of the table or as an
//! absolute CSS length, or leave it unspecified; the table itself carries a
//! width policy (`auto`, a percentage, or an absolute length). This module
//! walks the boxhead once, turns every declaration into a contribution in
//! one of two accumulable units (fraction of `\linewidth`, or points), and
//! folds the contributions into a single table-width expression. Under the
//! `auto` policy a single unspecified column makes the table width
//! indeterminate.
//!
//! Width strings are parsed into tagged variants once at this boundary;
//! nothing downstream re-inspects string suffixes.

use crate::core::length::LengthValue;
use crate::features::boxhead::{Boxhead, ColumnAlignment, ColumnType};
use crate::features::table::TableOptions;
use crate::utils::error::{RenderError, RenderResult};
use crate::utils::numfmt::format_num;

/// A column's declared width, parsed from its width string
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnWidthSpec {
    /// No width declared
    Unspecified,
    /// Trailing `%`: a percentage of the table width
    Percentage(f64),
    /// Any other CSS length, kept raw
    Absolute(String),
}

impl ColumnWidthSpec {
    /// Classify an optional width string
    pub fn from_spec(spec: Option<&str>) -> RenderResult<ColumnWidthSpec> {
        let raw = match spec {
            None | Some("") => return Ok(ColumnWidthSpec::Unspecified),
            Some(raw) => raw,
        };

        if let Some(pct) = raw.strip_suffix('%') {
            let pct = pct.parse::<f64>().map_err(|_| RenderError::InvalidLength {
                value: raw.to_string(),
            })?;
            return Ok(ColumnWidthSpec::Percentage(pct));
        }

        Ok(ColumnWidthSpec::Absolute(raw.to_string()))
    }
}

/// The table-level width declaration
#[derive(Debug, Clone, PartialEq)]
pub enum TableWidthPolicy {
    /// Width follows from the column declarations
    Auto,
    /// A percentage of `\linewidth`
    Percentage(f64),
    /// A fixed CSS length, parsed up front
    Absolute(LengthValue),
}

impl TableWidthPolicy {
    /// Parse the `table_width` option string
    pub fn parse(raw: &str) -> RenderResult<TableWidthPolicy> {
        if raw == "auto" {
            return Ok(TableWidthPolicy::Auto);
        }

        if let Some(pct) = raw.strip_suffix('%') {
            let pct = pct.parse::<f64>().map_err(|_| RenderError::InvalidLength {
                value: raw.to_string(),
            })?;
            return Ok(TableWidthPolicy::Percentage(pct));
        }

        Ok(TableWidthPolicy::Absolute(LengthValue::parse(raw)?))
    }
}

/// Per-column width contribution
///
/// At most one of `linewidth_fraction` and `points` is nonzero; both stay
/// zero for an unspecified column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidth {
    pub column_type: ColumnType,
    pub align: Option<ColumnAlignment>,
    pub unspecified: bool,
    pub linewidth_fraction: f64,
    pub points: f64,
}

/// The resolved width table handed to the LaTeX renderer
#[derive(Debug, Clone, PartialEq)]
pub struct WidthTable {
    pub columns: Vec<ColumnWidth>,
    /// Synthesized table-width expression, or `None` when indeterminate
    pub tbl_width: Option<String>,
}

impl WidthTable {
    /// Resolve per-column contributions and synthesize the table width from
    /// the current boxhead and options
    pub fn resolve(boxhead: &Boxhead, options: &TableOptions) -> RenderResult<WidthTable> {
        let policy = TableWidthPolicy::parse(&options.table_width)?;

        let mut columns = Vec::with_capacity(boxhead.len());

        for info in boxhead.columns() {
            let mut column = ColumnWidth {
                column_type: info.column_type,
                align: info.alignment,
                unspecified: false,
                linewidth_fraction: 0.0,
                points: 0.0,
            };

            match ColumnWidthSpec::from_spec(info.width.as_deref())? {
                ColumnWidthSpec::Unspecified => {
                    column.unspecified = true;
                }
                ColumnWidthSpec::Percentage(pct) => match &policy {
                    TableWidthPolicy::Auto => {
                        column.linewidth_fraction = pct / 100.0;
                    }
                    TableWidthPolicy::Percentage(tbl_pct) => {
                        column.linewidth_fraction = (pct * tbl_pct) / 1e4;
                    }
                    TableWidthPolicy::Absolute(length) => {
                        column.points = (pct / 100.0) * length.to_pt();
                    }
                },
                ColumnWidthSpec::Absolute(_) => {
                    // TODO: absolute column widths (e.g. "2in") currently
                    // contribute neither pt nor linewidth; they need a
                    // points rule before auto sizing can honor them
                }
            }

            columns.push(column);
        }

        let tbl_width = synthesize_table_width(&columns, &policy);

        Ok(WidthTable { columns, tbl_width })
    }

    /// True when no table width could be inferred (auto policy with at
    /// least one unspecified column)
    pub fn is_indeterminate(&self) -> bool {
        self.tbl_width.is_none()
    }
}

/// Fold per-column contributions into a single width expression
///
/// Percentage and absolute policies ignore the column contributions
/// entirely; only the auto policy aggregates them.
fn synthesize_table_width(columns: &[ColumnWidth], policy: &TableWidthPolicy) -> Option<String> {
    match policy {
        TableWidthPolicy::Auto => {
            if columns.iter().any(|c| c.unspecified) {
                // A table width can't be inferred
                return None;
            }

            let pt_total: f64 = columns.iter().map(|c| c.points).sum();
            let lw_total: f64 = columns.iter().map(|c| c.linewidth_fraction).sum();

            if pt_total <= 0.0 {
                Some(format!("{}\\linewidth", format_num(lw_total)))
            } else if lw_total <= 0.0 {
                Some(format!("{}pt", format_num(pt_total)))
            } else {
                Some(format!(
                    "{}pt+{}\\linewidth",
                    format_num(pt_total),
                    format_num(lw_total)
                ))
            }
        }
        TableWidthPolicy::Percentage(pct) => {
            Some(format!("{}\\linewidth", format_num(pct / 100.0)))
        }
        TableWidthPolicy::Absolute(length) => Some(format!("{}pt", format_num(length.to_pt()))),
    }
}
