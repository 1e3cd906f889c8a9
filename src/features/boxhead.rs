//! Boxhead - column metadata for a presentation table
//!
//! The boxhead holds everything known about a table's columns independent of
//! the row data: the variable name in the source data, the display label,
//! the role of the column (data, stub, row group), its alignment, and its
//! declared width. The LaTeX width derivation pipeline reads the boxhead;
//! the column operations on [`crate::Table`] mutate it.

use fxhash::FxHashSet;
use indexmap::IndexMap;

use crate::utils::error::{RenderError, RenderResult};

/// Role of a column within the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// Ordinary data column
    #[default]
    Default,
    /// Leftmost row-label region
    Stub,
    /// Row-group label region
    RowGroup,
    /// Present in the data but not rendered
    Hidden,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Default => "default",
            ColumnType::Stub => "stub",
            ColumnType::RowGroup => "row_group",
            ColumnType::Hidden => "hidden",
        }
    }
}

/// Horizontal cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
}

impl ColumnAlignment {
    /// Parse an alignment keyword, rejecting anything outside
    /// `left`/`center`/`right`
    pub fn parse(value: &str) -> RenderResult<ColumnAlignment> {
        match value {
            "left" => Ok(ColumnAlignment::Left),
            "center" => Ok(ColumnAlignment::Center),
            "right" => Ok(ColumnAlignment::Right),
            _ => Err(RenderError::InvalidAlignment {
                value: value.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnAlignment::Left => "left",
            ColumnAlignment::Center => "center",
            ColumnAlignment::Right => "right",
        }
    }
}

/// Metadata for a single column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    /// Variable name in the underlying data
    pub var: String,
    pub column_type: ColumnType,
    /// Display label; defaults to the variable name
    pub label: String,
    pub alignment: Option<ColumnAlignment>,
    /// Declared width as a CSS length or percentage string, if any
    pub width: Option<String>,
}

impl ColumnInfo {
    pub fn new(var: impl Into<String>) -> ColumnInfo {
        let var = var.into();
        ColumnInfo {
            label: var.clone(),
            var,
            column_type: ColumnType::Default,
            alignment: None,
            width: None,
        }
    }

    pub fn with_type(mut self, column_type: ColumnType) -> ColumnInfo {
        self.column_type = column_type;
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> ColumnInfo {
        self.width = Some(width.into());
        self
    }

    pub fn with_alignment(mut self, alignment: ColumnAlignment) -> ColumnInfo {
        self.alignment = Some(alignment);
        self
    }
}

/// Ordered column metadata for the whole table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boxhead {
    columns: Vec<ColumnInfo>,
}

impl Boxhead {
    /// Build a boxhead from column variable names, labels defaulting to the
    /// names
    pub fn from_vars<I, S>(vars: I) -> Boxhead
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Boxhead {
            columns: vars.into_iter().map(ColumnInfo::new).collect(),
        }
    }

    pub fn from_columns(columns: Vec<ColumnInfo>) -> Boxhead {
        Boxhead { columns }
    }

    pub fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Variable names in declaration order
    pub fn vars(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.var.as_str()).collect()
    }

    pub fn get(&self, var: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.var == var)
    }

    /// Verify that every requested name exists in the boxhead
    ///
    /// Collects all offenders so the error names the full set, and fails
    /// before any caller mutation happens.
    pub fn assert_subset<'a, I>(&self, names: I) -> RenderResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: FxHashSet<&str> = self.columns.iter().map(|c| c.var.as_str()).collect();

        let unknown: Vec<String> = names
            .into_iter()
            .filter(|n| !known.contains(n))
            .map(|n| n.to_string())
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(RenderError::UnknownColumns { columns: unknown })
        }
    }

    /// Replace the labels of the named columns
    ///
    /// Callers must have validated the names with [`Boxhead::assert_subset`]
    /// first; unknown names here are ignored.
    pub fn set_column_labels(&mut self, cases: &IndexMap<String, String>) {
        for column in &mut self.columns {
            if let Some(label) = cases.get(&column.var) {
                column.label = label.clone();
            }
        }
    }

    /// Set the alignment of the named columns
    pub fn set_column_aligns(&mut self, names: &[&str], align: ColumnAlignment) {
        for column in &mut self.columns {
            if names.contains(&column.var.as_str()) {
                column.alignment = Some(align);
            }
        }
    }

    /// Set the declared width of the named columns
    pub fn set_column_widths(&mut self, cases: &IndexMap<String, String>) {
        for column in &mut self.columns {
            if let Some(width) = cases.get(&column.var) {
                column.width = Some(width.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_vars_defaults() {
        let boxhead = Boxhead::from_vars(["year", "population"]);
        assert_eq!(boxhead.len(), 2);
        let col = boxhead.get("year").unwrap();
        assert_eq!(col.label, "year");
        assert_eq!(col.column_type, ColumnType::Default);
        assert_eq!(col.alignment, None);
        assert_eq!(col.width, None);
    }

    #[test]
    fn test_assert_subset() {
        let boxhead = Boxhead::from_vars(["a", "b", "c"]);
        assert!(boxhead.assert_subset(["a", "c"]).is_ok());

        let err = boxhead.assert_subset(["a", "x", "y"]).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownColumns {
                columns: vec!["x".to_string(), "y".to_string()]
            }
        );
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!(
            ColumnAlignment::parse("center").unwrap(),
            ColumnAlignment::Center
        );
        assert!(matches!(
            ColumnAlignment::parse("justify"),
            Err(RenderError::InvalidAlignment { .. })
        ));
    }

    #[test]
    fn test_set_column_labels() {
        let mut boxhead = Boxhead::from_vars(["a", "b"]);
        let mut cases = IndexMap::new();
        cases.insert("b".to_string(), "Column B".to_string());
        boxhead.set_column_labels(&cases);

        assert_eq!(boxhead.get("a").unwrap().label, "a");
        assert_eq!(boxhead.get("b").unwrap().label, "Column B");
    }
}
