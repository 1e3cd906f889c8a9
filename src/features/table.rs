//! Table context and column operations
//!
//! [`Table`] is the configuration snapshot a rendering pass works from: the
//! boxhead, the table-level options, and any registered format functions and
//! text transforms. The column operations (`cols_label`, `cols_align`,
//! `cols_width`, ...) validate their targets against the boxhead before
//! touching any state, then return the table for method chaining.

use indexmap::IndexMap;

use crate::features::boxhead::{Boxhead, ColumnAlignment};
use crate::features::formats::{FormatFns, FormatInfo};
use crate::features::transforms::{TextTransformFns, TextTransformInfo};
use crate::utils::error::RenderResult;

/// Table-level rendering options
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// `"auto"`, a percentage like `"80%"`, or a CSS length like `"6in"`
    pub table_width: String,
    /// Render as a `longtable` environment instead of a floating table
    pub latex_use_longtable: bool,
    /// Table font size: percentage, `pt` value, or any supported CSS length
    pub table_font_size: String,
    /// Float position specifier for `\begin{table}[..]`
    pub latex_tbl_pos: String,
}

impl Default for TableOptions {
    fn default() -> TableOptions {
        TableOptions {
            table_width: "auto".to_string(),
            latex_use_longtable: false,
            table_font_size: "16px".to_string(),
            latex_tbl_pos: "!t".to_string(),
        }
    }
}

/// A presentation-table configuration snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub boxhead: Boxhead,
    pub options: TableOptions,
    pub n_rows: usize,
    pub formats: Vec<FormatInfo>,
    pub text_transforms: Vec<TextTransformInfo>,
}

impl Table {
    pub fn new(boxhead: Boxhead) -> Table {
        Table {
            boxhead,
            ..Table::default()
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Table {
        self.options = options;
        self
    }

    pub fn with_n_rows(mut self, n_rows: usize) -> Table {
        self.n_rows = n_rows;
        self
    }

    /// Relabel one or more columns
    ///
    /// Every key must name an existing column; on failure no label is
    /// changed. An empty case set is a no-op.
    pub fn cols_label(mut self, cases: IndexMap<String, String>) -> RenderResult<Table> {
        if cases.is_empty() {
            return Ok(self);
        }

        self.boxhead
            .assert_subset(cases.keys().map(String::as_str))?;

        self.boxhead.set_column_labels(&cases);

        Ok(self)
    }

    /// Relabel columns by running a converter over their current names
    ///
    /// `columns = None` targets every column.
    pub fn cols_label_with<F>(
        mut self,
        columns: Option<&[&str]>,
        converter: F,
    ) -> RenderResult<Table>
    where
        F: Fn(&str) -> String,
    {
        let targets = self.resolve_columns(columns)?;

        let cases: IndexMap<String, String> = targets
            .into_iter()
            .map(|col| {
                let label = converter(&col);
                (col, label)
            })
            .collect();

        self.boxhead.set_column_labels(&cases);

        Ok(self)
    }

    /// Set the alignment of one or more columns
    ///
    /// `align` must be one of `left`, `center`, `right`; `columns = None`
    /// targets every column. Validation happens before any column changes.
    pub fn cols_align(mut self, align: &str, columns: Option<&[&str]>) -> RenderResult<Table> {
        let align = ColumnAlignment::parse(align)?;

        let targets = self.resolve_columns(columns)?;
        let target_refs: Vec<&str> = targets.iter().map(String::as_str).collect();
        self.boxhead.set_column_aligns(&target_refs, align);

        Ok(self)
    }

    /// Declare the width of one or more columns as a percentage or CSS
    /// length string
    pub fn cols_width(mut self, cases: IndexMap<String, String>) -> RenderResult<Table> {
        if cases.is_empty() {
            return Ok(self);
        }

        self.boxhead
            .assert_subset(cases.keys().map(String::as_str))?;

        self.boxhead.set_column_widths(&cases);

        Ok(self)
    }

    /// Register cell format functions for the given columns and rows
    ///
    /// `columns = None` targets every column; `rows = None` targets every
    /// row. `prepend` inserts the registration ahead of existing ones.
    pub fn fmt(
        mut self,
        fns: FormatFns,
        columns: Option<&[&str]>,
        rows: Option<Vec<usize>>,
        prepend: bool,
    ) -> RenderResult<Table> {
        let cols = self.resolve_columns(columns)?;
        let rows = rows.unwrap_or_else(|| (0..self.n_rows).collect());

        let info = FormatInfo::new(fns, cols, rows);

        if prepend {
            self.formats.insert(0, info);
        } else {
            self.formats.push(info);
        }

        Ok(self)
    }

    /// Register text transform functions for the given columns and rows
    pub fn text_transform(
        mut self,
        fns: TextTransformFns,
        columns: Option<&[&str]>,
        rows: Option<Vec<usize>>,
    ) -> RenderResult<Table> {
        let cols = self.resolve_columns(columns)?;
        let rows = rows.unwrap_or_else(|| (0..self.n_rows).collect());

        self.text_transforms
            .push(TextTransformInfo::new(fns, cols, rows));

        Ok(self)
    }

    fn resolve_columns(&self, columns: Option<&[&str]>) -> RenderResult<Vec<String>> {
        match columns {
            Some(cols) => {
                self.boxhead.assert_subset(cols.iter().copied())?;
                Ok(cols.iter().map(|c| c.to_string()).collect())
            }
            None => Ok(self.boxhead.vars().iter().map(|v| v.to_string()).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RenderError;
    use pretty_assertions::assert_eq;

    fn sample_table() -> Table {
        Table::new(Boxhead::from_vars(["country_name", "year", "population"]))
    }

    #[test]
    fn test_cols_label_chaining() {
        let mut cases = IndexMap::new();
        cases.insert("year".to_string(), "Year".to_string());
        cases.insert("population".to_string(), "Population".to_string());

        let table = sample_table().cols_label(cases).unwrap();
        assert_eq!(table.boxhead.get("year").unwrap().label, "Year");
        assert_eq!(table.boxhead.get("country_name").unwrap().label, "country_name");
    }

    #[test]
    fn test_cols_label_unknown_is_atomic() {
        let mut cases = IndexMap::new();
        cases.insert("year".to_string(), "Year".to_string());
        cases.insert("nope".to_string(), "Nope".to_string());

        let table = sample_table();
        let before = table.clone();
        let err = table.cols_label(cases).unwrap_err();

        assert!(matches!(err, RenderError::UnknownColumns { .. }));
        // No partial relabeling happened
        assert_eq!(before.boxhead.get("year").unwrap().label, "year");
    }

    #[test]
    fn test_cols_label_empty_noop() {
        let table = sample_table().cols_label(IndexMap::new()).unwrap();
        assert_eq!(table.boxhead.get("year").unwrap().label, "year");
    }

    #[test]
    fn test_cols_label_with_converter() {
        let table = sample_table()
            .cols_label_with(Some(&["year"]), |c| c.to_uppercase())
            .unwrap();
        assert_eq!(table.boxhead.get("year").unwrap().label, "YEAR");
        assert_eq!(table.boxhead.get("population").unwrap().label, "population");
    }

    #[test]
    fn test_cols_label_with_all_columns() {
        let table = sample_table()
            .cols_label_with(None, |c| format!("**{}**", c))
            .unwrap();
        assert_eq!(table.boxhead.get("year").unwrap().label, "**year**");
        assert_eq!(
            table.boxhead.get("country_name").unwrap().label,
            "**country_name**"
        );
    }

    #[test]
    fn test_cols_align() {
        let table = sample_table()
            .cols_align("right", Some(&["population"]))
            .unwrap();
        assert_eq!(
            table.boxhead.get("population").unwrap().alignment,
            Some(ColumnAlignment::Right)
        );
        assert_eq!(table.boxhead.get("year").unwrap().alignment, None);
    }

    #[test]
    fn test_cols_align_invalid_value() {
        let table = sample_table();
        let err = table.cols_align("justify", None).unwrap_err();
        assert!(matches!(err, RenderError::InvalidAlignment { .. }));
    }

    #[test]
    fn test_cols_align_all() {
        let table = sample_table().cols_align("center", None).unwrap();
        for col in table.boxhead.columns() {
            assert_eq!(col.alignment, Some(ColumnAlignment::Center));
        }
    }

    #[test]
    fn test_cols_width() {
        let mut cases = IndexMap::new();
        cases.insert("year".to_string(), "50%".to_string());

        let table = sample_table().cols_width(cases).unwrap();
        assert_eq!(table.boxhead.get("year").unwrap().width.as_deref(), Some("50%"));
    }

    #[test]
    fn test_fmt_rows_default_to_all() {
        fn ident(x: &str) -> String {
            x.to_string()
        }

        let table = sample_table()
            .with_n_rows(3)
            .fmt(FormatFns::from_default(ident), None, None, false)
            .unwrap();

        assert_eq!(table.formats.len(), 1);
        assert_eq!(table.formats[0].rows, vec![0, 1, 2]);
        assert_eq!(table.formats[0].cols.len(), 3);
    }

    #[test]
    fn test_fmt_prepend() {
        fn first(x: &str) -> String {
            format!("1{}", x)
        }
        fn second(x: &str) -> String {
            format!("2{}", x)
        }

        let table = sample_table()
            .fmt(FormatFns::from_default(first), None, None, false)
            .unwrap()
            .fmt(FormatFns::from_default(second), None, None, true)
            .unwrap();

        let head = table.formats[0].fns.default.unwrap();
        assert_eq!(head("x"), "2x");
    }

    #[test]
    fn test_text_transform_subset_check() {
        fn noop(x: &str) -> String {
            x.to_string()
        }

        let err = sample_table()
            .text_transform(TextTransformFns::from_default(noop), Some(&["ghost"]), None)
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownColumns { .. }));
    }
}
