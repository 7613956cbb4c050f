use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use tictactoe_engine::line_scanner::has_won;
use tictactoe_engine::{calculate_move, BoardState, Difficulty, Player, SessionRng};

fn bench_hard_opening(size: usize) {
    let mut board = BoardState::new(size);
    board.place(size / 2, size / 2, Player::One).unwrap();
    let mut session_rng = SessionRng::new(7);
    calculate_move(Difficulty::Hard, &mut board, Player::Two, &mut session_rng);
}

fn bench_hard_full_game_3x3() {
    let mut board = BoardState::new(3);
    let mut player = Player::One;
    let mut session_rng = SessionRng::new(7);
    while !board.is_full() && !has_won(&board, player.opponent()) {
        let pos = calculate_move(Difficulty::Hard, &mut board, player, &mut session_rng);
        board.place(pos.row, pos.col, player).unwrap();
        player = player.opponent();
    }
}

fn bench_hard_mid_game_10x10() {
    let mut board = BoardState::new(10);
    let moves = [
        (4, 4, Player::One), (5, 5, Player::Two), (4, 5, Player::One), (5, 4, Player::Two),
        (3, 3, Player::One), (6, 6, Player::Two), (2, 7, Player::One), (7, 2, Player::Two),
    ];
    for (row, col, player) in moves {
        board.place(row, col, player).unwrap();
    }
    let mut session_rng = SessionRng::new(7);
    calculate_move(Difficulty::Hard, &mut board, Player::One, &mut session_rng);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("full_game_3x3", |b| {
        b.iter(bench_hard_full_game_3x3)
    });

    group.bench_function("opening_5x5", |b| {
        b.iter(|| bench_hard_opening(5))
    });

    group.bench_function("opening_10x10", |b| {
        b.iter(|| bench_hard_opening(10))
    });

    group.bench_function("mid_game_10x10", |b| {
        b.iter(bench_hard_mid_game_10x10)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
