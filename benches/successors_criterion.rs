use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chezz::game_state::game_state::GameState;
use chezz::move_generation::move_generator::MoveGenerator;
use chezz::move_generation::perft::perft;
use chezz::move_generation::successor_generator::{ParallelSuccessorGenerator, SuccessorGenerator};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    board: &'static str,
    expected_nodes: &'static [usize],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "lone_bishop",
        board: "w 0 0 0\n{\n  a1: 'wB'\n}\n",
        expected_nodes: &[7],
    },
    BenchCase {
        name: "promotion",
        board: "w 0 0 0\n{\n  a7: 'wP'\n}\n",
        expected_nodes: &[1],
    },
    BenchCase {
        name: "mixed_midgame",
        board: "w 0 0 0\n{\n  e1: 'wK',\n  d2: 'wF',\n  e2: 'wP',\n  c1: 'wC',\n  f1: 'wB',\n  b1: 'wN',\n  a1: 'wR',\n  d1: 'wQ',\n  e8: 'bK',\n  d7: 'bF',\n  e7: 'bP',\n  c8: 'bC',\n  h8: 'bR',\n  d5: 'bZ'\n}\n",
        expected_nodes: &[],
    },
];

fn bench_successors(c: &mut Criterion) {
    let mut group = c.benchmark_group("successors");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    for case in CASES {
        let board = GameState::from_text(case.board).expect("benchmark board should parse");

        // Correctness guard before benchmarking.
        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            let counts = perft(&SuccessorGenerator, &board, depth).expect("perft should run");
            assert_eq!(
                counts.nodes, *expected_nodes,
                "node mismatch for {} depth {}",
                case.name, depth
            );
        }

        let produced = SuccessorGenerator
            .generate_successors(&board)
            .expect("generation should succeed")
            .len();
        group.throughput(Throughput::Elements(produced as u64));

        group.bench_with_input(BenchmarkId::new("sequential", case.name), &board, |b, board| {
            b.iter(|| {
                let successors = SuccessorGenerator
                    .generate_successors(black_box(board))
                    .expect("generation should succeed");
                black_box(successors.len())
            });
        });

        let parallel = ParallelSuccessorGenerator { threads: 4 };
        group.bench_with_input(BenchmarkId::new("parallel_4", case.name), &board, |b, board| {
            b.iter(|| {
                let successors = parallel
                    .generate_successors(black_box(board))
                    .expect("generation should succeed");
                black_box(successors.len())
            });
        });
    }

    group.finish();
}

fn bench_perft_depth_two(c: &mut Criterion) {
    let board = GameState::from_text(CASES[2].board).expect("benchmark board should parse");
    c.bench_function("perft_mixed_midgame_d2", |b| {
        b.iter(|| {
            perft(&SuccessorGenerator, black_box(&board), 2)
                .expect("perft should run")
                .nodes
        })
    });
}

criterion_group!(successor_benches, bench_successors, bench_perft_depth_two);
criterion_main!(successor_benches);
