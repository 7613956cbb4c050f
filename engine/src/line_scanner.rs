use crate::board::BoardState;
use crate::types::{Cell, Player, Position};

/// A full-length line. `Line::all` yields rows, then columns, then the main
/// diagonal, then the anti-diagonal; winner lookup depends on that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    #[inline]
    pub fn cell_at(&self, size: usize, i: usize) -> Position {
        match *self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        }
    }

    pub fn cells(&self, size: usize) -> Vec<Position> {
        (0..size).map(|i| self.cell_at(size, i)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub line: Line,
    pub cells: Vec<Position>,
}

fn owned_by(board: &BoardState, line: Line, player: Player) -> bool {
    let size = board.size();
    (0..size).all(|i| {
        let pos = line.cell_at(size, i);
        board.cell(pos.row, pos.col) == Cell::Taken(player)
    })
}

pub fn winner(board: &BoardState, player: Player) -> Option<WinningLine> {
    let size = board.size();
    Line::all(size)
        .find(|&line| owned_by(board, line, player))
        .map(|line| WinningLine {
            player,
            line,
            cells: line.cells(size),
        })
}

pub fn has_won(board: &BoardState, player: Player) -> bool {
    Line::all(board.size()).any(|line| owned_by(board, line, player))
}

pub fn is_draw(board: &BoardState) -> bool {
    board.is_full() && !has_won(board, Player::One) && !has_won(board, Player::Two)
}

/// Static score of a position: each line held only by `maximizing` with `c`
/// marks adds `10^(c-1)`, each line held only by `minimizing` subtracts the
/// same, contested and empty lines add nothing.
pub fn evaluate_heuristic(board: &BoardState, maximizing: Player, minimizing: Player) -> i64 {
    let size = board.size();
    let mut score = 0i64;

    for line in Line::all(size) {
        let mut max_count = 0u32;
        let mut min_count = 0u32;
        for i in 0..size {
            let pos = line.cell_at(size, i);
            match board.cell(pos.row, pos.col) {
                Cell::Empty => {}
                Cell::Taken(p) if p == maximizing => max_count += 1,
                Cell::Taken(p) if p == minimizing => min_count += 1,
                Cell::Taken(_) => {}
            }
        }

        score += line_value(max_count, min_count);
    }

    score
}

/// Heuristic contribution of one line given how many cells each side holds.
#[inline]
pub(crate) fn line_value(max_count: u32, min_count: u32) -> i64 {
    match (max_count, min_count) {
        (0, 0) => 0,
        (c, 0) => 10i64.pow(c - 1),
        (0, c) => -10i64.pow(c - 1),
        _ => 0,
    }
}
