//! LaTeX document-fragment assembly
//!
//! The component renderers (caption, heading, column labels, body, footer)
//! are specified as a trait so the width-derivation pipeline can be
//! exercised end to end before any body-rendering logic exists. Every
//! method defaults to an empty fragment; [`EmptyComponents`] is the
//! placeholder implementation.

use crate::core::statements::{fontsize_statement, table_width_statement, wrap_end, wrap_start};
use crate::core::width::WidthTable;
use crate::features::table::Table;
use crate::utils::error::RenderResult;

/// Renderers for the individual pieces of a LaTeX table
///
/// Implementations receive the configuration snapshot and the resolved
/// width table; each returns a LaTeX fragment that is concatenated verbatim
/// into the document.
pub trait LatexComponents {
    fn table_start(&self, _table: &Table, _width: &WidthTable) -> String {
        String::new()
    }

    fn caption(&self, _table: &Table) -> String {
        String::new()
    }

    fn heading(&self, _table: &Table) -> String {
        String::new()
    }

    fn columns(&self, _table: &Table, _width: &WidthTable) -> String {
        String::new()
    }

    fn body(&self, _table: &Table, _width: &WidthTable) -> String {
        String::new()
    }

    fn footer(&self, _table: &Table) -> String {
        String::new()
    }

    fn table_end(&self, _table: &Table) -> String {
        String::new()
    }
}

/// The placeholder implementation: every component is an empty fragment
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyComponents;

impl LatexComponents for EmptyComponents {}

/// Assemble the LaTeX fragment for a table using the given component
/// renderers
pub fn render_latex_with<C: LatexComponents>(table: &Table, components: &C) -> RenderResult<String> {
    let width = WidthTable::resolve(&table.boxhead, &table.options)?;

    let mut out = String::new();
    out.push_str(&wrap_start(&table.options));

    let width_statement = table_width_statement(&table.options)?;
    if !width_statement.is_empty() {
        out.push_str(&width_statement);
        out.push('\n');
    }

    out.push_str(&fontsize_statement(&table.options));
    out.push_str(&components.table_start(table, &width));
    out.push_str(&components.caption(table));
    out.push_str(&components.heading(table));
    out.push_str(&components.columns(table, &width));
    out.push_str(&components.body(table, &width));
    out.push_str(&components.footer(table));
    out.push_str(&components.table_end(table));
    out.push_str(&wrap_end(&table.options));

    Ok(out)
}

/// Assemble the LaTeX fragment with the placeholder components
pub fn render_latex(table: &Table) -> RenderResult<String> {
    render_latex_with(table, &EmptyComponents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::boxhead::Boxhead;
    use crate::features::table::TableOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_with_empty_components() {
        let table = Table::new(Boxhead::from_vars(["a", "b"])).with_options(TableOptions {
            latex_use_longtable: true,
            table_width: "80%".to_string(),
            table_font_size: "12pt".to_string(),
            ..TableOptions::default()
        });

        let fragment = render_latex(&table).unwrap();
        assert_eq!(
            fragment,
            "\\begingroup\n\
             \\setlength\\LTleft{0.1\\linewidth}\n\
             \\setlength\\LTright{0.1\\linewidth}\n\
             \\fontsize{12.0pt}{14.4pt}\\selectfont\n"
        );
    }

    #[test]
    fn test_custom_component_is_invoked() {
        struct BodyOnly;

        impl LatexComponents for BodyOnly {
            fn body(&self, _table: &Table, width: &WidthTable) -> String {
                match &width.tbl_width {
                    Some(w) => format!("% width {}\n", w),
                    None => "% width indeterminate\n".to_string(),
                }
            }
        }

        let table = Table::new(Boxhead::from_vars(["a"]));
        let fragment = render_latex_with(&table, &BodyOnly).unwrap();
        // Auto policy with an unspecified column: indeterminate
        assert!(fragment.contains("% width indeterminate"));
    }

    #[test]
    fn test_render_propagates_invalid_width() {
        let table = Table::new(Boxhead::from_vars(["a"])).with_options(TableOptions {
            table_width: "6furlong".to_string(),
            ..TableOptions::default()
        });
        assert!(render_latex(&table).is_err());
    }
}
