//! World-seeded noise instantiation.

use std::cell::RefCell;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::density::DensityError;
use crate::noise::NormalNoise;
use crate::random::{Random, RandomSplitter, Xoroshiro};
use crate::types::Identifier;

/// Construction parameters for one noise id.
#[derive(Debug, Clone)]
pub struct NoiseParameters {
    /// Octave of the lowest frequency (negative: below block frequency).
    pub first_octave: i32,
    /// Amplitude per octave, starting at `first_octave`.
    pub amplitudes: Vec<f64>,
}

impl NoiseParameters {
    /// Convenience constructor.
    #[must_use]
    pub fn new(first_octave: i32, amplitudes: &[f64]) -> Self {
        Self {
            first_octave,
            amplitudes: amplitudes.to_vec(),
        }
    }
}

/// Lazily instantiates and caches the noises of one world seed.
///
/// Samplers are seeded from the id hash, so instantiation order never
/// affects a sampler's output. Single-threaded by contract; the cache is a
/// `RefCell`, not a lock.
pub struct NoiseState {
    splitter: RandomSplitter,
    params: FxHashMap<Identifier, NoiseParameters>,
    cache: RefCell<FxHashMap<Identifier, Arc<NormalNoise>>>,
}

impl NoiseState {
    /// Create the noise state for a world seed with the given parameter
    /// registry.
    #[must_use]
    pub fn new(seed: u64, params: FxHashMap<Identifier, NoiseParameters>) -> Self {
        Self {
            splitter: Xoroshiro::from_seed(seed).next_positional(),
            params,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Get the sampler for a noise id, instantiating it on first use.
    ///
    /// An id with no registered parameters is a fatal configuration error.
    pub fn get_or_create_noise(&self, id: &Identifier) -> Result<Arc<NormalNoise>, DensityError> {
        if let Some(noise) = self.cache.borrow().get(id) {
            return Ok(Arc::clone(noise));
        }
        let params = self
            .params
            .get(id)
            .ok_or_else(|| DensityError::UnknownNoise(id.clone()))?;
        let noise = Arc::new(NormalNoise::create(
            &self.splitter,
            id.as_str(),
            params.first_octave,
            &params.amplitudes,
        ));
        self.cache
            .borrow_mut()
            .insert(id.clone(), Arc::clone(&noise));
        Ok(noise)
    }
}
