//! Free-standing LaTeX layout statements
//!
//! These generators derive the auxiliary directives that surround a rendered
//! table: the `LTleft`/`LTright` side margins that keep a fixed-width
//! longtable centered across page breaks, the `\fontsize` statement, and the
//! wrapper that opens the table environment. Each produces a string that is
//! concatenated verbatim into the final document fragment.

use std::env;

use crate::core::length::{convert_to_px, css_length_has_supported_units};
use crate::core::width::TableWidthPolicy;
use crate::features::table::TableOptions;
use crate::utils::error::RenderResult;
use crate::utils::numfmt::format_num;

const SIDES: [&str; 2] = ["LTleft", "LTright"];

/// Derive the side-margin statement for continuation-table bookends
///
/// Bookends are only required when a table width is specified and the
/// longtable environment is in use; otherwise the statement is empty. A
/// percentage policy splits the leftover linewidth evenly; an absolute
/// policy centers via a half-linewidth-minus-half-width `\dimexpr`.
pub fn table_width_statement(options: &TableOptions) -> RenderResult<String> {
    if !options.latex_use_longtable {
        return Ok(String::new());
    }

    let policy = TableWidthPolicy::parse(&options.table_width)?;

    let statement = match policy {
        TableWidthPolicy::Auto => String::new(),
        TableWidthPolicy::Percentage(pct) => {
            let side_width = format_num((100.0 - pct) / 200.0);

            SIDES
                .iter()
                .map(|side| format!("\\setlength\\{}{{{}\\linewidth}}", side, side_width))
                .collect::<Vec<_>>()
                .join("\n")
        }
        TableWidthPolicy::Absolute(length) => {
            let halfwidth_pt = format_num(length.to_pt() / 2.0);

            SIDES
                .iter()
                .map(|side| {
                    format!(
                        "\\setlength\\{}{{\\dimexpr(0.5\\linewidth - {}pt)}}",
                        side, halfwidth_pt
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    };

    Ok(statement)
}

/// Derive the `\fontsize` statement from the table font-size option
///
/// Percentages scale a 12pt base; `pt` values pass through; any other
/// supported CSS length converts via pixels. Line height is always 1.2x the
/// base size. An unrecognized size yields an empty statement rather than an
/// error.
pub fn fontsize_statement(options: &TableOptions) -> String {
    let font_size = options.table_font_size.as_str();

    if let Some(pct) = font_size.strip_suffix('%') {
        if let Ok(pct) = pct.parse::<f64>() {
            let base = (pct / 100.0) * 12.0;
            return fontsize_fmt(base);
        }
        return String::new();
    }

    if let Some(pt) = font_size.strip_suffix("pt") {
        if let Ok(pt) = pt.parse::<f64>() {
            return fontsize_fmt(pt);
        }
        return String::new();
    }

    if css_length_has_supported_units(font_size, true) {
        if let Ok(px) = convert_to_px(font_size) {
            return fontsize_fmt(px * 0.75);
        }
    }

    String::new()
}

fn fontsize_fmt(base_pt: f64) -> String {
    format!(
        "\\fontsize{{{:3.1}pt}}{{{:3.1}pt}}\\selectfont\n",
        base_pt,
        base_pt * 1.2
    )
}

/// Open the outer wrapper: a group for longtables, a float otherwise
///
/// Quarto injects its own float positioning, so the position specifier is
/// dropped when rendering under Quarto.
pub fn wrap_start(options: &TableOptions) -> String {
    if options.latex_use_longtable {
        return "\\begingroup\n".to_string();
    }

    let tbl_pos = if is_quarto_render() {
        String::new()
    } else {
        format!("[{}]", options.latex_tbl_pos)
    };

    format!("\\begin{{table}}{}\n", tbl_pos)
}

/// Close the outer wrapper
///
/// Placeholder empty fragment; the closing logic lives with the component
/// renderers once those are implemented.
pub fn wrap_end(_options: &TableOptions) -> String {
    String::new()
}

fn is_quarto_render() -> bool {
    env::var_os("QUARTO_BIN_PATH").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn longtable_options(table_width: &str) -> TableOptions {
        TableOptions {
            table_width: table_width.to_string(),
            latex_use_longtable: true,
            ..TableOptions::default()
        }
    }

    #[test]
    fn test_width_statement_auto_is_empty() {
        let statement = table_width_statement(&longtable_options("auto")).unwrap();
        assert_eq!(statement, "");
    }

    #[test]
    fn test_width_statement_requires_longtable() {
        let options = TableOptions {
            table_width: "80%".to_string(),
            latex_use_longtable: false,
            ..TableOptions::default()
        };
        assert_eq!(table_width_statement(&options).unwrap(), "");
    }

    #[test]
    fn test_width_statement_percentage() {
        let statement = table_width_statement(&longtable_options("80%")).unwrap();
        assert_eq!(
            statement,
            "\\setlength\\LTleft{0.1\\linewidth}\n\\setlength\\LTright{0.1\\linewidth}"
        );
    }

    #[test]
    fn test_width_statement_absolute() {
        // 6in = 432pt, half is 216pt
        let statement = table_width_statement(&longtable_options("6in")).unwrap();
        assert_eq!(
            statement,
            "\\setlength\\LTleft{\\dimexpr(0.5\\linewidth - 216pt)}\n\
             \\setlength\\LTright{\\dimexpr(0.5\\linewidth - 216pt)}"
        );
    }

    #[test]
    fn test_fontsize_percentage() {
        let options = TableOptions {
            table_font_size: "150%".to_string(),
            ..TableOptions::default()
        };
        assert_eq!(
            fontsize_statement(&options),
            "\\fontsize{18.0pt}{21.6pt}\\selectfont\n"
        );
    }

    #[test]
    fn test_fontsize_points() {
        let options = TableOptions {
            table_font_size: "12pt".to_string(),
            ..TableOptions::default()
        };
        assert_eq!(
            fontsize_statement(&options),
            "\\fontsize{12.0pt}{14.4pt}\\selectfont\n"
        );
    }

    #[test]
    fn test_fontsize_css_length() {
        // Default 16px converts to 12pt
        let options = TableOptions::default();
        assert_eq!(
            fontsize_statement(&options),
            "\\fontsize{12.0pt}{14.4pt}\\selectfont\n"
        );
    }

    #[test]
    fn test_fontsize_unrecognized_is_empty() {
        let options = TableOptions {
            table_font_size: "big".to_string(),
            ..TableOptions::default()
        };
        assert_eq!(fontsize_statement(&options), "");
    }

    #[test]
    fn test_wrap_start_longtable() {
        let options = TableOptions {
            latex_use_longtable: true,
            ..TableOptions::default()
        };
        assert_eq!(wrap_start(&options), "\\begingroup\n");
    }

    #[test]
    fn test_wrap_start_float() {
        let options = TableOptions::default();
        // Position specifier comes from latex_tbl_pos unless under Quarto
        if !is_quarto_render() {
            assert_eq!(wrap_start(&options), "\\begin{table}[!t]\n");
        }
    }

    #[test]
    fn test_wrap_end_empty() {
        assert_eq!(wrap_end(&TableOptions::default()), "");
    }
}
