use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match_grid::core::{Board, Catalog, SimpleRng};
use match_grid::engine::{find_runs, ResolutionEngine, SwapController};
use match_grid::types::{EngineConfig, SwapDirection};

fn catalog() -> Catalog {
    Catalog::from_names(&["amber", "beryl", "coral", "flint", "pearl"]).unwrap()
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_9x9", |b| {
        b.iter(|| {
            Board::new(9, 9, catalog(), SimpleRng::new(black_box(12345))).unwrap()
        })
    });
}

fn bench_detection(c: &mut Criterion) {
    let mut board = Board::new(9, 9, catalog(), SimpleRng::new(12345)).unwrap();
    let config = EngineConfig::default();

    c.bench_function("scan_9x9_stable", |b| {
        b.iter(|| find_runs(black_box(&mut board), &config))
    });
}

fn bench_detection_with_diagonals(c: &mut Criterion) {
    let mut board = Board::new(9, 9, catalog(), SimpleRng::new(12345)).unwrap();
    let config = EngineConfig {
        diagonal_matches: true,
        ..EngineConfig::default()
    };

    c.bench_function("scan_9x9_diagonals", |b| {
        b.iter(|| find_runs(black_box(&mut board), &config))
    });
}

fn bench_resolution(c: &mut Criterion) {
    let config = EngineConfig::default();

    c.bench_function("resolve_punched_run", |b| {
        b.iter(|| {
            let mut board = Board::new(9, 9, catalog(), SimpleRng::new(12345)).unwrap();
            // Force a starting run so at least one clear/shift/refill pass runs.
            let token = board.occupant(0, 0).unwrap().unwrap();
            for col in 1..4 {
                board.set_occupant(col, 0, Some(token)).unwrap();
            }
            let mut engine = ResolutionEngine::new();
            engine.run_until_stable(&mut board, &config).unwrap()
        })
    });
}

fn bench_swap(c: &mut Criterion) {
    let config = EngineConfig::default();

    c.bench_function("request_swap", |b| {
        b.iter(|| {
            let mut board = Board::new(9, 9, catalog(), SimpleRng::new(12345)).unwrap();
            let mut controller = SwapController::new(config);
            let _ = controller.request_swap(&mut board, 4, 4, SwapDirection::Right);
        })
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_detection,
    bench_detection_with_diagonals,
    bench_resolution,
    bench_swap
);
criterion_main!(benches);
