//! Dimension formula synthesis.
//!
//! Free-text dimension expressions like `"15.00 x 0.60 x 1.20"` or
//! `"2 X 3.6m"` become lists of numeric tokens joined by multiplication, so
//! the exported sheet carries a verifiable formula instead of an opaque
//! number. Expressions with no extractable number (placeholders like `"-"`)
//! fall back to the upstream-computed quantity as a plain value.

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

/// Relative tolerance when reconciling the token product with the
/// upstream-computed quantity.
const DIVERGENCE_EPSILON: f64 = 1e-6;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[-+]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)")
            .expect("dimension number regex must compile")
    })
}

/// Outcome of synthesizing one dimension expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DimensionFormula {
    /// Numeric tokens in source order, multiplier first when it is not 1,
    /// to be joined by a multiplication operator.
    Product { tokens: Vec<String> },
    /// No numeric token was extractable. The caller must emit the
    /// upstream-computed quantity as a plain value instead.
    Fallback,
}

/// Synthesize a multiplication formula from a dimension expression.
///
/// The expression is split on the separators `x`, `X` and `*`; each segment
/// contributes the first signed decimal number it contains, with unit
/// suffixes and stray text discarded. Token order follows source order.
///
/// The product of the tokens is reconciled against `quantity` (which the
/// upstream extraction computed independently); divergence beyond a small
/// tolerance is logged, never corrected - the exported cell still caches
/// `quantity`.
pub fn synthesize_dimension(expression: &str, multiplier: f64, quantity: f64) -> DimensionFormula {
    let mut tokens: Vec<String> = Vec::new();
    for segment in expression.split(['x', 'X', '*']) {
        if let Some(m) = number_re().find(segment) {
            tokens.push(m.as_str().to_string());
        }
    }

    if tokens.is_empty() {
        return DimensionFormula::Fallback;
    }

    let product: f64 = tokens
        .iter()
        .filter_map(|t| t.parse::<f64>().ok())
        .product::<f64>()
        * multiplier;
    if (product - quantity).abs() > DIVERGENCE_EPSILON * quantity.abs().max(1.0) {
        warn!(
            expression,
            product, quantity, "dimension product diverges from extracted quantity"
        );
    }

    let mut out = Vec::with_capacity(tokens.len() + 1);
    if multiplier != 1.0 {
        out.push(format_token(multiplier));
    }
    out.extend(tokens);
    DimensionFormula::Product { tokens: out }
}

/// Render the multiplier as a formula token, shortest faithful form.
fn format_token(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
