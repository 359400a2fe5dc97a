//! Exponential and uniform transforms of a single uniform draw.

use crate::source::UniformSource;

/// Draws from the standard exponential distribution (scale 1).
///
/// Inverse-CDF transform `-ln(1 - U)`; consumes exactly one draw. Using
/// `1 - U` keeps the argument in `(0, 1]`, so the result is finite and
/// non-negative.
#[inline]
pub fn standard_exponential<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    -(1.0 - source.next_f64()).ln()
}

/// Draws from the exponential distribution with mean `scale`.
///
/// `scale > 0` is assumed, not checked.
#[inline]
pub fn exponential<S: UniformSource + ?Sized>(source: &mut S, scale: f64) -> f64 {
    scale * standard_exponential(source)
}

/// Draws uniformly from `[loc, loc + scale)`.
///
/// `scale > 0` is assumed, not checked.
#[inline]
pub fn uniform<S: UniformSource + ?Sized>(source: &mut S, loc: f64, scale: f64) -> f64 {
    loc + scale * source.next_f64()
}
