//! Per-output-context cell format functions
//!
//! A format registration carries up to four functions, one per output
//! context (HTML, LaTeX, RTF) plus a default fallback, along with the
//! columns and rows it targets. Registrations are applied in order when the
//! body is rendered; the dispatch picks the context-specific function and
//! falls back to `default`.

/// A cell-formatting function: raw cell text in, formatted text out
pub type FormatFn = fn(&str) -> String;

/// Output context a format function applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    Html,
    Latex,
    Rtf,
}

/// Format functions keyed by output context, each optional
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormatFns {
    pub html: Option<FormatFn>,
    pub latex: Option<FormatFn>,
    pub rtf: Option<FormatFn>,
    pub default: Option<FormatFn>,
}

impl FormatFns {
    /// Register a single function as the default for every context
    pub fn from_default(func: FormatFn) -> FormatFns {
        FormatFns {
            default: Some(func),
            ..FormatFns::default()
        }
    }

    /// Pick the function for a context, falling back to `default`
    pub fn for_context(&self, context: RenderContext) -> Option<FormatFn> {
        let specific = match context {
            RenderContext::Html => self.html,
            RenderContext::Latex => self.latex,
            RenderContext::Rtf => self.rtf,
        };
        specific.or(self.default)
    }
}

/// A format registration: the functions plus their column/row targets
#[derive(Debug, Clone, PartialEq)]
pub struct FormatInfo {
    pub fns: FormatFns,
    pub cols: Vec<String>,
    pub rows: Vec<usize>,
}

impl FormatInfo {
    pub fn new(fns: FormatFns, cols: Vec<String>, rows: Vec<usize>) -> FormatInfo {
        FormatInfo { fns, cols, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(x: &str) -> String {
        x.to_uppercase()
    }

    fn braced(x: &str) -> String {
        format!("{{{}}}", x)
    }

    #[test]
    fn test_context_dispatch_prefers_specific() {
        let fns = FormatFns {
            latex: Some(braced),
            default: Some(upper),
            ..FormatFns::default()
        };

        let latex = fns.for_context(RenderContext::Latex).unwrap();
        assert_eq!(latex("x"), "{x}");

        let html = fns.for_context(RenderContext::Html).unwrap();
        assert_eq!(html("x"), "X");
    }

    #[test]
    fn test_context_dispatch_empty() {
        let fns = FormatFns::default();
        assert!(fns.for_context(RenderContext::Rtf).is_none());
    }
}
