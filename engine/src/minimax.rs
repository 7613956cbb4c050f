use crate::board::BoardState;
use crate::line_scanner::line_value;
use crate::types::{Cell, Player};

pub const WIN_SCORE: i64 = 10;

/// Depth-limited alpha-beta search with `ai` as the maximizer. Positions are
/// explored by setting a cell, recursing and clearing it again, so the board
/// is unchanged when `search` returns.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxSearch {
    ai: Player,
    opponent: Player,
}

impl MinimaxSearch {
    pub fn new(ai: Player) -> Self {
        Self {
            ai,
            opponent: ai.opponent(),
        }
    }

    pub fn search(
        &self,
        board: &mut BoardState,
        depth: u32,
        maximizing: bool,
        alpha: i64,
        beta: i64,
    ) -> i64 {
        let mut lines = LineTracker::new(board, self.ai);
        self.search_lines(board, &mut lines, depth, maximizing, alpha, beta)
    }

    fn search_lines(
        &self,
        board: &mut BoardState,
        lines: &mut LineTracker,
        depth: u32,
        maximizing: bool,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        if lines.has_won(self.ai) {
            return WIN_SCORE + depth as i64;
        }
        if lines.has_won(self.opponent) {
            return -(WIN_SCORE + depth as i64);
        }
        if board.is_full() {
            return 0;
        }
        if depth == 0 {
            return lines.score;
        }

        let size = board.size();
        let mover = if maximizing { self.ai } else { self.opponent };
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for row in 0..size {
            for col in 0..size {
                if board.cell(row, col) != Cell::Empty {
                    continue;
                }

                board.set(row, col, mover);
                lines.update(row, col, mover, true);
                let eval = self.search_lines(board, lines, depth - 1, !maximizing, alpha, beta);
                lines.update(row, col, mover, false);
                board.clear(row, col);

                if maximizing {
                    best = best.max(eval);
                    alpha = alpha.max(eval);
                } else {
                    best = best.min(eval);
                    beta = beta.min(eval);
                }
                if beta <= alpha {
                    return best;
                }
            }
        }

        best
    }
}

/// Mark counts for every row, column and diagonal, updated alongside the
/// board so a search node only touches the lines through the cell that
/// changed. Line indices: rows, then columns, then main and anti diagonal.
struct LineTracker {
    size: usize,
    ai: Player,
    counts: Vec<[u32; 2]>,
    complete: [u32; 2],
    score: i64,
}

impl LineTracker {
    fn new(board: &BoardState, ai: Player) -> Self {
        let size = board.size();
        let mut tracker = Self {
            size,
            ai,
            counts: vec![[0; 2]; 2 * size + 2],
            complete: [0; 2],
            score: 0,
        };
        for row in 0..size {
            for col in 0..size {
                if let Cell::Taken(player) = board.cell(row, col) {
                    tracker.update(row, col, player, true);
                }
            }
        }
        tracker
    }

    fn has_won(&self, player: Player) -> bool {
        self.complete[player.index()] > 0
    }

    fn update(&mut self, row: usize, col: usize, player: Player, placed: bool) {
        let size = self.size;
        let p = player.index();
        let main = (row == col).then_some(2 * size);
        let anti = (row + col == size - 1).then_some(2 * size + 1);

        for idx in [Some(row), Some(size + col), main, anti].into_iter().flatten() {
            let before = self.counts[idx];
            let mut after = before;
            if placed {
                after[p] += 1;
                if after[p] as usize == size {
                    self.complete[p] += 1;
                }
            } else {
                if before[p] as usize == size {
                    self.complete[p] -= 1;
                }
                after[p] -= 1;
            }
            self.score += self.value(after) - self.value(before);
            self.counts[idx] = after;
        }
    }

    fn value(&self, counts: [u32; 2]) -> i64 {
        line_value(counts[self.ai.index()], counts[self.ai.opponent().index()])
    }
}
