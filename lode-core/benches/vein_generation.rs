#![allow(missing_docs)]
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

use lode_core::chunk::GenRegion;
use lode_core::registry::ChemicalRegistry;
use lode_core::worldgen::noise::default_noise_parameters;
use lode_core::worldgen::{DensityFunctions, PlacementRequest, VeinDefinition, VeinedGenerator};
use lode_utils::density::NoiseState;
use lode_utils::random::Xoroshiro;
use lode_utils::{BlockPos, BlockStateId, SectionPos};

const SEED: u64 = 12345;

fn generator() -> VeinedGenerator {
    let definition = VeinDefinition::new(-64, 64)
        .with_ore_block(BlockStateId(2), 3)
        .with_ore_block(BlockStateId(3), 1)
        .with_rare_block(BlockStateId(4), 1)
        .with_filler(BlockStateId(5));
    let functions = DensityFunctions::with_defaults();
    let state = NoiseState::new(SEED, default_noise_parameters());
    VeinedGenerator::new(
        definition,
        &functions,
        &state,
        Arc::new(ChemicalRegistry::new()),
    )
    .expect("definition binds")
}

fn region() -> GenRegion {
    GenRegion::filled(
        SectionPos { x: -2, y: -2, z: -2 },
        SectionPos { x: 1, y: 1, z: 1 },
        BlockStateId(1),
    )
}

fn bench_generator_binding(c: &mut Criterion) {
    c.bench_function("vein_generator_binding", |b| {
        b.iter(|| {
            black_box(generator());
        });
    });
}

fn bench_vein_generation(c: &mut Criterion) {
    let generator = generator();
    let request = PlacementRequest {
        cluster_size: 32,
        density: 0.7,
    };

    c.bench_function("vein_generation_r16", |b| {
        b.iter(|| {
            let mut region = region();
            let mut random = Xoroshiro::from_seed(black_box(4242));
            black_box(generator.generate(
                &mut region,
                &mut random,
                &request,
                BlockPos::new(0, 0, 0),
            ));
        });
    });
}

fn bench_max_radius_generation(c: &mut Criterion) {
    let generator = generator();
    let request = PlacementRequest {
        cluster_size: 64,
        density: 0.7,
    };

    c.bench_function("vein_generation_r22", |b| {
        b.iter(|| {
            let mut region = region();
            let mut random = Xoroshiro::from_seed(black_box(4242));
            black_box(generator.generate(
                &mut region,
                &mut random,
                &request,
                BlockPos::new(0, 0, 0),
            ));
        });
    });
}

criterion_group!(
    benches,
    bench_generator_binding,
    bench_vein_generation,
    bench_max_radius_generation,
);
criterion_main!(benches);
