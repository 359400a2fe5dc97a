//! # Uniform Random Sources
//!
//! This module defines the single capability the sampling algorithms consume
//! from a random number generator: a uniform draw in `[0, 1)`.
//!
//! ## Design Rationale
//!
//! - **Minimal capability**: [`UniformSource`] exposes one operation only;
//!   anything else a caller needs from the generator is reached through the
//!   sampler's explicit accessors rather than through the sampler itself
//! - **Reproducibility**: [`SeededRng`] is seeded from a `u64`, so identical
//!   seeds give bit-identical sample streams
//! - **Static dispatch**: samplers are generic over the source; no
//!   `Box<dyn Trait>` in the hot path
//!
//! ## Module Structure
//!
//! - `prng`: seeded wrapper around `rand::rngs::StdRng`
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::source::{SeededRng, UniformSource};
//!
//! let mut rng = SeededRng::from_seed(12345);
//! let u = rng.next_f64();
//! assert!((0.0..1.0).contains(&u));
//! ```

mod prng;

pub use prng::SeededRng;

use rand::distributions::{Distribution, Standard};
use rand::RngCore;

/// A source of independent uniform variates in `[0, 1)`.
///
/// Every `rand::RngCore` is a `UniformSource`, drawing through
/// `rand::distributions::Standard` (53 bits of precision).
pub trait UniformSource {
    /// Draws one value uniformly from the half-open interval `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        Standard.sample(self)
    }
}
