//! Validated distribution values usable with any `rand::Rng`.
//!
//! These carry their parameters and implement `rand_distr::Distribution`,
//! drawing through the same algorithms as
//! [`DistributionSampler`](crate::DistributionSampler). For a given source
//! state, `Poisson::new(lam)?.sample(&mut rng)` and
//! `DistributionSampler::new(rng).poisson(lam)` produce the same value.
//!
//! # Examples
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rand_distr::Distribution;
//! use sampler_core::distributions::Poisson;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let poisson = Poisson::new(12.5).unwrap();
//! let counts: Vec<i64> = poisson.sample_iter(&mut rng).take(100).collect();
//! assert!(counts.iter().all(|&k| k >= 0));
//! ```

use rand::Rng;
use rand_distr::Distribution;

use crate::algorithms;
use crate::error::SamplingError;

fn check_finite(name: &'static str, value: f64) -> Result<(), SamplingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SamplingError::NonFiniteParameter { name, value })
    }
}

fn check_scale(scale: f64) -> Result<(), SamplingError> {
    check_finite("scale", scale)?;
    if scale <= 0.0 {
        return Err(SamplingError::NonPositiveScale(scale));
    }
    Ok(())
}

/// Exponential distribution with mean `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    /// Creates the distribution, rejecting non-finite or non-positive scales.
    pub fn new(scale: f64) -> Result<Self, SamplingError> {
        check_scale(scale)?;
        Ok(Self { scale })
    }

    /// Returns the scale (mean).
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Exponential {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        algorithms::exponential(rng, self.scale)
    }
}

/// Uniform distribution over `[loc, loc + scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Uniform {
    loc: f64,
    scale: f64,
}

impl Uniform {
    /// Creates the distribution, rejecting a non-finite `loc` and
    /// non-finite or non-positive scales.
    pub fn new(loc: f64, scale: f64) -> Result<Self, SamplingError> {
        check_finite("loc", loc)?;
        check_scale(scale)?;
        Ok(Self { loc, scale })
    }

    /// Returns the lower bound.
    #[inline]
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Returns the width of the interval.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution<f64> for Uniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        algorithms::uniform(rng, self.loc, self.scale)
    }
}

/// Poisson distribution with rate `lam`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Poisson {
    lam: f64,
}

impl Poisson {
    /// Creates the distribution, rejecting non-finite or negative rates.
    /// A rate of zero is allowed and always samples `0`.
    pub fn new(lam: f64) -> Result<Self, SamplingError> {
        check_finite("lam", lam)?;
        if lam < 0.0 {
            return Err(SamplingError::NegativeRate(lam));
        }
        Ok(Self { lam })
    }

    /// Returns the rate (mean and variance).
    #[inline]
    pub fn lam(&self) -> f64 {
        self.lam
    }
}

impl Distribution<i64> for Poisson {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        algorithms::poisson(rng, self.lam)
    }
}
