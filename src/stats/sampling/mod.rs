//! Sampling and random number generation module
//!
//! [`resample`] draws one resampled copy of a value sequence, with or without
//! replacement. The [`Resample`] trait is the seam the engine draws through, so
//! a seeded RNG (or a fixed resampler in tests) can be injected.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::{Error, Result};

/// Source of resampled sequences
pub trait Resample {
    /// Produce one resample of `size` values drawn from `values`
    fn resample(&mut self, values: &[f64], replace: bool, size: usize) -> Result<Vec<f64>>;
}

/// Draw `size` values from `values`
///
/// With `replace` every draw is independent and uniform over all positions.
/// Without it, distinct positions are drawn; `size == values.len()` gives a
/// uniformly random permutation.
pub fn resample<R: Rng>(values: &[f64], replace: bool, size: usize, rng: &mut R) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::InvalidArgument(
            "Resampling requires at least one value".into(),
        ));
    }

    if size == 0 {
        return Err(Error::InvalidArgument(
            "Resample size must be positive".into(),
        ));
    }

    let n = values.len();
    if replace {
        Ok((0..size).map(|_| values[rng.random_range(0..n)]).collect())
    } else {
        if size > n {
            return Err(Error::InvalidArgument(format!(
                "For sampling without replacement, size {} must not exceed data size {}",
                size, n
            )));
        }

        let mut shuffled = values.to_vec();
        if size == n {
            shuffled.shuffle(rng);
            Ok(shuffled)
        } else {
            let (chosen, _) = shuffled.partial_shuffle(rng, size);
            Ok(chosen.to_vec())
        }
    }
}

/// [`Resample`] implementation backed by a random number generator
#[derive(Debug, Clone)]
pub struct RngResampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngResampler<R> {
    pub fn new(rng: R) -> Self {
        RngResampler { rng }
    }

    /// Give back the generator, e.g. to continue the same stream elsewhere
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngResampler<StdRng> {
    /// Seeded generator for reproducible runs, fresh entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = if let Some(seed_val) = seed {
            StdRng::seed_from_u64(seed_val)
        } else {
            let mut seed_bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut seed_bytes);
            StdRng::from_seed(seed_bytes)
        };
        RngResampler::new(rng)
    }
}

impl<R: Rng> Resample for RngResampler<R> {
    fn resample(&mut self, values: &[f64], replace: bool, size: usize) -> Result<Vec<f64>> {
        resample(values, replace, size, &mut self.rng)
    }
}
