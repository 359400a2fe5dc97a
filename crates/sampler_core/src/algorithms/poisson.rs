//! Poisson sampling.
//!
//! Two regimes, selected by the rate `lam`:
//!
//! | Rate | Method | Expected draws |
//! |------|--------|----------------|
//! | `lam == 0` | constant `0` | 0 |
//! | `0 < lam < 10` | multiplicative (product of uniforms) | `lam + 1` |
//! | `lam >= 10` | transformed rejection with squeeze (PTRS) | O(1) |
//!
//! # Algorithm Reference
//!
//! - Hörmann, W. (1993). "The transformed rejection method for generating
//!   Poisson random variables". Insurance: Mathematics and Economics 12, 39-45.
//! - Knuth, D. E. *The Art of Computer Programming*, Vol. 2, §3.4.1.

use tracing::trace;

use super::special::log_gamma;
use crate::source::UniformSource;

/// Rates at or above this use transformed rejection; below it, the
/// multiplicative method.
pub const POISSON_PTRS_THRESHOLD: f64 = 10.0;

/// Draws a Poisson-distributed count with rate `lam`.
///
/// `lam >= 0` is assumed, not checked. `lam == 0` returns `0` without
/// touching the source.
///
/// # Examples
///
/// ```rust
/// use sampler_core::algorithms::poisson;
/// use sampler_core::source::SeededRng;
///
/// let mut rng = SeededRng::from_seed(42);
/// assert_eq!(poisson(&mut rng, 0.0), 0);
/// assert!(poisson(&mut rng, 4.5) >= 0);
/// assert!(poisson(&mut rng, 1e6) >= 0);
/// ```
pub fn poisson<S: UniformSource + ?Sized>(source: &mut S, lam: f64) -> i64 {
    if lam >= POISSON_PTRS_THRESHOLD {
        trace!(lam, "poisson: transformed rejection");
        poisson_ptrs(source, lam)
    } else if lam == 0.0 {
        0
    } else {
        trace!(lam, "poisson: multiplicative");
        poisson_mult(source, lam)
    }
}

/// Multiplicative method: multiply uniforms until the running product drops
/// to `exp(-lam)` or below; the number of factors before that is the sample.
fn poisson_mult<S: UniformSource + ?Sized>(source: &mut S, lam: f64) -> i64 {
    let enlam = (-lam).exp();
    let mut count = 0;
    let mut prod = 1.0;
    loop {
        prod *= source.next_f64();
        if prod > enlam {
            count += 1;
        } else {
            return count;
        }
    }
}

/// Transformed rejection with squeeze (PTRS).
///
/// Unbounded accept/reject loop; capping it would bias the distribution.
fn poisson_ptrs<S: UniformSource + ?Sized>(source: &mut S, lam: f64) -> i64 {
    let slam = lam.sqrt();
    let loglam = lam.ln();
    let b = 0.931 + 2.53 * slam;
    let a = -0.059 + 0.02483 * b;
    let invalpha = 1.1239 + 1.1328 / (b - 3.4);
    let vr = 0.9277 - 3.6224 / (b - 2.0);

    loop {
        let u = source.next_f64() - 0.5;
        let v = source.next_f64();
        let us = 0.5 - u.abs();
        let k = ((2.0 * a / us + b) * u + lam + 0.43).floor() as i64;

        // squeeze
        if us >= 0.07 && v <= vr {
            return k;
        }
        if k < 0 || (us < 0.013 && v > us) {
            continue;
        }

        let lhs = v.ln() + invalpha.ln() - (a / (us * us) + b).ln();
        let rhs = -lam + k as f64 * loglam - log_gamma((k + 1) as f64);
        if lhs <= rhs {
            return k;
        }
    }
}
