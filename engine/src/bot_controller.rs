use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::line_scanner::has_won;
use crate::log_debug;
use crate::minimax::MinimaxSearch;
use crate::session_rng::SessionRng;
use crate::types::{Player, Position};

pub const HARD_SEARCH_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Picks a cell for `ai`. The board is borrowed mutably so candidate moves
/// can be tried in place; it is restored before returning.
///
/// Panics if the board has no empty cell: the controller only asks for a
/// move while the game is in progress.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut BoardState,
    ai: Player,
    rng: &mut SessionRng,
) -> Position {
    let available_moves = board.empty_cells();
    assert!(
        !available_moves.is_empty(),
        "calculate_move called on a full board"
    );

    match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => calculate_heuristic_move(board, ai, &available_moves, rng),
        Difficulty::Hard => calculate_search_move(board, ai, &available_moves, rng),
    }
}

fn calculate_random_move(available_moves: &[Position], rng: &mut SessionRng) -> Position {
    let idx = rng.random_range(0..available_moves.len());
    available_moves[idx]
}

fn calculate_heuristic_move(
    board: &mut BoardState,
    ai: Player,
    available_moves: &[Position],
    rng: &mut SessionRng,
) -> Position {
    if let Some(pos) = find_forced_move(board, ai, available_moves) {
        return pos;
    }
    preferred_move(board, available_moves, rng)
}

fn calculate_search_move(
    board: &mut BoardState,
    ai: Player,
    available_moves: &[Position],
    rng: &mut SessionRng,
) -> Position {
    if let Some(pos) = find_forced_move(board, ai, available_moves) {
        return pos;
    }

    let search = MinimaxSearch::new(ai);
    let mut best_move = None;
    let mut best_score = i64::MIN;

    for &pos in available_moves {
        board.set(pos.row, pos.col, ai);
        // Candidates that cannot beat best_score are cut early.
        let score = search.search(board, HARD_SEARCH_DEPTH, false, best_score, i64::MAX);
        board.clear(pos.row, pos.col);

        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    match best_move {
        Some(pos) => {
            log_debug!("Search picked {} with score {}", pos, best_score);
            pos
        }
        None => preferred_move(board, available_moves, rng),
    }
}

/// Own immediate win first, then a block of the opponent's immediate win.
fn find_forced_move(
    board: &mut BoardState,
    ai: Player,
    available_moves: &[Position],
) -> Option<Position> {
    find_winning_move(board, ai, available_moves)
        .or_else(|| find_winning_move(board, ai.opponent(), available_moves))
}

fn find_winning_move(
    board: &mut BoardState,
    player: Player,
    available_moves: &[Position],
) -> Option<Position> {
    for &pos in available_moves {
        board.set(pos.row, pos.col, player);
        let wins = has_won(board, player);
        board.clear(pos.row, pos.col);

        if wins {
            return Some(pos);
        }
    }
    None
}

/// Center, then corners (top-left, top-right, bottom-left, bottom-right),
/// then any empty cell.
fn preferred_move(
    board: &BoardState,
    available_moves: &[Position],
    rng: &mut SessionRng,
) -> Position {
    let size = board.size();
    let center = size / 2;
    let last = size - 1;
    let candidates = [
        Position::new(center, center),
        Position::new(0, 0),
        Position::new(0, last),
        Position::new(last, 0),
        Position::new(last, last),
    ];

    candidates
        .into_iter()
        .find(|pos| board.is_empty_at(pos.row, pos.col))
        .unwrap_or_else(|| calculate_random_move(available_moves, rng))
}
