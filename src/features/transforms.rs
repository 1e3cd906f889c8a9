//! Text transform registrations
//!
//! Text transforms run after cell formatting and rewrite the already
//! formatted text. Like format functions they are registered per output
//! context with a default fallback, scoped to columns and rows.

use crate::features::formats::RenderContext;

/// A text-transforming function: formatted cell text in, rewritten text out
pub type TextTransformFn = fn(&str) -> String;

/// Transform functions keyed by output context, each optional
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextTransformFns {
    pub html: Option<TextTransformFn>,
    pub latex: Option<TextTransformFn>,
    pub rtf: Option<TextTransformFn>,
    pub default: Option<TextTransformFn>,
}

impl TextTransformFns {
    /// Register a single function as the default for every context
    pub fn from_default(func: TextTransformFn) -> TextTransformFns {
        TextTransformFns {
            default: Some(func),
            ..TextTransformFns::default()
        }
    }

    /// Pick the function for a context, falling back to `default`
    pub fn for_context(&self, context: RenderContext) -> Option<TextTransformFn> {
        let specific = match context {
            RenderContext::Html => self.html,
            RenderContext::Latex => self.latex,
            RenderContext::Rtf => self.rtf,
        };
        specific.or(self.default)
    }
}

/// A transform registration: the functions plus their column/row targets
#[derive(Debug, Clone, PartialEq)]
pub struct TextTransformInfo {
    pub fns: TextTransformFns,
    pub cols: Vec<String>,
    pub rows: Vec<usize>,
}

impl TextTransformInfo {
    pub fn new(fns: TextTransformFns, cols: Vec<String>, rows: Vec<usize>) -> TextTransformInfo {
        TextTransformInfo { fns, cols, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(x: &str) -> String {
        format!("~~{}~~", x)
    }

    #[test]
    fn test_default_applies_everywhere() {
        let fns = TextTransformFns::from_default(strike);
        for ctx in [RenderContext::Html, RenderContext::Latex, RenderContext::Rtf] {
            let f = fns.for_context(ctx).unwrap();
            assert_eq!(f("gone"), "~~gone~~");
        }
    }
}
