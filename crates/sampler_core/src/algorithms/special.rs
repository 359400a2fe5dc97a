//! Log-gamma for the Poisson rejection test.

use std::f64::consts::PI;

/// Coefficients of the Stirling series for `ln Γ`, lowest order first.
const STIRLING_COEFFS: [f64; 10] = [
    8.333333333333333e-02,
    -2.777777777777778e-03,
    7.936507936507937e-04,
    -5.952380952380952e-04,
    8.417508417508418e-04,
    -1.917526917526918e-03,
    6.410256410256410e-03,
    -2.955065359477124e-02,
    1.796443723688307e-01,
    -1.39243221690590e+00,
];

/// Arguments at or below this are shifted up before evaluating the series.
const SHIFT_LIMIT: f64 = 7.0;

/// Natural logarithm of the gamma function for `x >= 1`.
///
/// Evaluates the asymptotic Stirling series directly for `x > 7`. Smaller
/// arguments are shifted up by `n = floor(7 - x)` unit steps, the series is
/// evaluated at `x + n`, and the recurrence `ln Γ(y + 1) = ln y + ln Γ(y)` is
/// unwound back down to `x`. `ln Γ(1) = ln Γ(2) = 0` exactly.
pub(crate) fn log_gamma(x: f64) -> f64 {
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }

    let shift = if x <= SHIFT_LIMIT {
        (SHIFT_LIMIT - x) as u32
    } else {
        0
    };
    let mut x0 = x + f64::from(shift);

    let x2 = 1.0 / (x0 * x0);
    let series = STIRLING_COEFFS[..9]
        .iter()
        .rev()
        .fold(STIRLING_COEFFS[9], |acc, &c| acc * x2 + c);

    let mut gl = series / x0 + 0.5 * (2.0 * PI).ln() + (x0 - 0.5) * x0.ln() - x0;
    for _ in 0..shift {
        x0 -= 1.0;
        gl -= x0.ln();
    }
    gl
}
