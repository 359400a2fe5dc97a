//! Sampling algorithms over a [`UniformSource`](crate::source::UniformSource).
//!
//! Each function here is a free-standing transform of uniform draws, so the
//! same code backs both [`DistributionSampler`](crate::DistributionSampler)
//! and the `rand_distr::Distribution` impls in
//! [`distributions`](crate::distributions).
//!
//! - [`continuous`]: exponential and uniform transforms (one draw each)
//! - [`poisson`](mod@poisson): multiplicative and transformed-rejection Poisson samplers
//! - `special`: log-gamma helper used by the rejection test

pub mod continuous;
pub mod poisson;
mod special;

pub use continuous::{exponential, standard_exponential, uniform};
pub use poisson::{poisson, POISSON_PTRS_THRESHOLD};
