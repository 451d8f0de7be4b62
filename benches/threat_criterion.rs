use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_referee::board_location::Coordinates;
use chess_referee::game_state::board::Board;
use chess_referee::game_state::chess_types::KingThreat;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    moves: &'static [(&'static str, &'static str)],
    expected_threat: KingThreat,
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        moves: &[],
        expected_threat: KingThreat::NoThreat,
    },
    BenchCase {
        name: "open_game",
        moves: &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")],
        expected_threat: KingThreat::NoThreat,
    },
    BenchCase {
        name: "fools_mate",
        moves: &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        expected_threat: KingThreat::Checkmate,
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        moves: &[],
        expected_threat: KingThreat::NoThreat,
    },
    BenchCase {
        name: "open_game",
        moves: &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")],
        expected_threat: KingThreat::NoThreat,
    },
    BenchCase {
        name: "fools_mate",
        moves: &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
        expected_threat: KingThreat::Checkmate,
    },
    BenchCase {
        name: "scholars_check",
        moves: &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
        expected_threat: KingThreat::Checkmate,
    },
    BenchCase {
        name: "castled_middlegame",
        moves: &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
            ("e1", "g1"),
            ("g8", "f6"),
            ("d2", "d3"),
            ("e8", "g8"),
        ],
        expected_threat: KingThreat::NoThreat,
    },
];

fn suite_name() -> &'static str {
    match std::env::var("REFEREE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn square(name: &str) -> Coordinates {
    name.parse().expect("benchmark square should parse")
}

fn play(case: &BenchCase) -> Board {
    let mut board = Board::new_game();
    for (source, target) in case.moves {
        board
            .execute_move(square(source), square(target))
            .expect("benchmark moves should be legal");
    }
    board
}

fn all_possible_new_fields(board: &Board) -> usize {
    let color = board.active_color();
    Coordinates::all()
        .filter(|field| board.piece_at(*field).is_some_and(|p| p.color() == color))
        .map(|field| board.find_possible_new_fields(field).len())
        .sum()
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("queries_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = play(case);
        let king_field = board
            .king_field(board.active_color())
            .expect("benchmark positions keep both kings");

        // Correctness guard before benchmarking.
        assert_eq!(
            board.detect_king_threat(king_field),
            case.expected_threat,
            "threat mismatch for {}",
            case.name
        );

        group.bench_with_input(
            BenchmarkId::new("detect_king_threat", case.name),
            &board,
            |b, board| b.iter(|| black_box(board.detect_king_threat(black_box(king_field)))),
        );

        group.bench_with_input(
            BenchmarkId::new("possible_new_fields", case.name),
            &board,
            |b, board| b.iter(|| black_box(all_possible_new_fields(black_box(board)))),
        );
    }

    group.finish();
}

fn bench_execute_revert(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("execute_revert_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases().iter().filter(|case| !case.moves.is_empty()) {
        group.throughput(Throughput::Elements(case.moves.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(case.name), |b| {
            b.iter(|| {
                let mut board = play(case);
                for _ in 0..case.moves.len() {
                    board.revert_last_move();
                }
                black_box(board.history_len())
            });
        });
    }

    group.finish();
}

criterion_group!(referee_benches, bench_queries, bench_execute_revert);
criterion_main!(referee_benches);
