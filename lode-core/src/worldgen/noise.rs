//! The density function registry and the default ore-vein functions.

use std::sync::Arc;

use lode_utils::density::{DensityFunction, NoiseParameters};
use lode_utils::Identifier;
use rustc_hash::FxHashMap;

/// Named density function trees, shared by all generators.
#[derive(Default)]
pub struct DensityFunctions {
    functions: FxHashMap<Identifier, Arc<DensityFunction>>,
}

impl DensityFunctions {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry carrying the built-in ore-vein functions.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Identifier::of("lode:ore_vein_toggle"), ore_vein_toggle());
        registry.register(Identifier::of("lode:ore_vein_ridged"), ore_vein_ridged());
        registry
    }

    /// Register a function under an id, replacing any previous entry.
    pub fn register(&mut self, id: Identifier, function: DensityFunction) {
        self.functions.insert(id, Arc::new(function));
    }

    /// Look up a function by id.
    #[must_use]
    pub fn get(&self, id: &Identifier) -> Option<&Arc<DensityFunction>> {
        self.functions.get(id)
    }
}

/// The vein toggle: low-frequency veininess sampled at 1.5x scale.
fn ore_vein_toggle() -> DensityFunction {
    DensityFunction::noise(Identifier::of("lode:ore_veininess"), 1.5, 1.5)
}

/// The vein ridged gate.
///
/// Two independent noises folded into ridges; the vein interior is where
/// both stay near zero, so the gate passes only when the maximum of the two
/// folded noises dips below 0.08.
fn ore_vein_ridged() -> DensityFunction {
    let a = DensityFunction::Abs(Arc::new(DensityFunction::noise(
        Identifier::of("lode:ore_vein_a"),
        4.0,
        4.0,
    )));
    let b = DensityFunction::Abs(Arc::new(DensityFunction::noise(
        Identifier::of("lode:ore_vein_b"),
        4.0,
        4.0,
    )));
    DensityFunction::Add(
        Arc::new(DensityFunction::Constant(-0.08)),
        Arc::new(DensityFunction::Max(Arc::new(a), Arc::new(b))),
    )
}

/// Noise parameters backing the built-in functions.
#[must_use]
pub fn default_noise_parameters() -> FxHashMap<Identifier, NoiseParameters> {
    let mut params = FxHashMap::default();
    params.insert(
        Identifier::of("lode:ore_veininess"),
        NoiseParameters::new(-8, &[1.0]),
    );
    params.insert(
        Identifier::of("lode:ore_vein_a"),
        NoiseParameters::new(-7, &[1.0]),
    );
    params.insert(
        Identifier::of("lode:ore_vein_b"),
        NoiseParameters::new(-7, &[1.0]),
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use lode_utils::density::{NoiseContext, NoiseState};

    #[test]
    fn defaults_are_registered() {
        let registry = DensityFunctions::with_defaults();
        assert!(registry.get(&Identifier::of("lode:ore_vein_toggle")).is_some());
        assert!(registry.get(&Identifier::of("lode:ore_vein_ridged")).is_some());
        assert!(registry.get(&Identifier::of("lode:missing")).is_none());
    }

    #[test]
    fn defaults_bind_against_default_parameters() {
        let registry = DensityFunctions::with_defaults();
        let state = NoiseState::new(4242, default_noise_parameters());

        let toggle = registry
            .get(&Identifier::of("lode:ore_vein_toggle"))
            .unwrap()
            .bind(&state)
            .unwrap();
        let ridged = registry
            .get(&Identifier::of("lode:ore_vein_ridged"))
            .unwrap()
            .bind(&state)
            .unwrap();

        let ctx = NoiseContext::new(100, -20, -300);
        // toggle is a plain normal noise sample, bounded by the sampler range
        assert!(toggle.sample(&ctx).abs() <= 2.0);
        // ridged is max of two folded noises minus the threshold
        assert!(ridged.sample(&ctx) >= -0.08);
    }

    #[test]
    fn register_replaces() {
        let mut registry = DensityFunctions::new();
        let id = Identifier::of("lode:custom");
        registry.register(id.clone(), DensityFunction::Constant(1.0));
        registry.register(id.clone(), DensityFunction::Constant(2.0));
        match registry.get(&id).unwrap().as_ref() {
            DensityFunction::Constant(v) => assert!((v - 2.0).abs() < f64::EPSILON),
            other => panic!("unexpected function: {other:?}"),
        }
    }
}
