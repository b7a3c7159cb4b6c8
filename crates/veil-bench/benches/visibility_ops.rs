//! Criterion micro-benchmarks for index builds and gate evaluations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use veil_bench::open_grid;
use veil_core::{
    ActorId, MapGenerationId, ObserverSpecial, ObserverState, RoomCoord, TargetState, VisFlags,
};
use veil_gate::{standard_rules, GateConfig, VisibilityGate};
use veil_graph::{DirectionTable, IndexHandle, VisibilityBuilder};
use veil_test_utils::{FixedForcedVisibility, ScriptedRaycast};

/// Benchmark: full index build over a fully connected 16×16 map.
fn bench_build_16x16(c: &mut Criterion) {
    let (map, doors) = open_grid(16);
    let builder = VisibilityBuilder::default();

    c.bench_function("build_index_16x16_open", |b| {
        b.iter(|| {
            let index = builder.build(&map, &doors, MapGenerationId(1)).unwrap();
            black_box(&index);
        });
    });
}

/// Benchmark: the hot path — one gate evaluation per pair across a row
/// of observers against a fixed target, graph tier only.
fn bench_gate_evaluate_row(c: &mut Criterion) {
    let (map, doors) = open_grid(16);
    let index = VisibilityBuilder::new(DirectionTable::default())
        .build(&map, &doors, MapGenerationId(1))
        .unwrap();
    let handle = Arc::new(IndexHandle::new());
    handle.publish(index);
    let gate = VisibilityGate::new(
        GateConfig::default(),
        standard_rules(),
        handle,
        Box::new(FixedForcedVisibility(Some(0.0))),
        Box::new(ScriptedRaycast(Some(true))),
    );

    let target = TargetState {
        actor: ActorId(0),
        position: [0.0; 3],
        room: RoomCoord::new(8, 0, 8),
        emitting_light: false,
    };

    c.bench_function("gate_evaluate_row_of_16", |b| {
        b.iter(|| {
            for x in 0..16 {
                let observer = ObserverState {
                    actor: ActorId(x as u64 + 1),
                    position: [x as f32 * 10.0, 0.0, 80.0],
                    room: RoomCoord::new(x, 0, 8),
                    special: ObserverSpecial::None,
                };
                let flags = gate.evaluate(VisFlags::NONE, &observer, &target, 1.0e6);
                black_box(flags);
            }
        });
    });
}

criterion_group!(benches, bench_build_16x16, bench_gate_evaluate_row);
criterion_main!(benches);
