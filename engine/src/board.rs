use crate::error::MoveError;
use crate::types::{Cell, Player, Position};

pub const MIN_SIZE: usize = 3;
pub const MAX_SIZE: usize = 10;

/// Square grid stored row-major. `set`/`clear` are the unchecked O(1)
/// primitives search uses to explore a position and then undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl BoardState {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            occupied: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    #[inline]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        match self.get(row, col) {
            None => Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.size,
            }),
            Some(Cell::Taken(_)) => Err(MoveError::Occupied { row, col }),
            Some(Cell::Empty) => {
                self.set(row, col, player);
                Ok(())
            }
        }
    }

    /// Caller guarantees the cell is in range and empty.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, player: Player) {
        let idx = row * self.size + col;
        debug_assert_eq!(self.cells[idx], Cell::Empty);
        self.cells[idx] = Cell::Taken(player);
        self.occupied += 1;
    }

    #[inline]
    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        let idx = row * self.size + col;
        if self.cells[idx] != Cell::Empty {
            self.cells[idx] = Cell::Empty;
            self.occupied -= 1;
        }
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(self.cells.len() - self.occupied);
        for (idx, &cell) in self.cells.iter().enumerate() {
            if cell == Cell::Empty {
                moves.push(Position::new(idx / self.size, idx % self.size));
            }
        }
        moves
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.occupied = 0;
    }

    /// Builds a board from rows like `"XO."`: `X` is player 1, `O` player 2,
    /// anything else an empty cell.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.set(row, col, Player::One),
                    'O' => board.set(row, col, Player::Two),
                    _ => {}
                }
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let mut board = BoardState::new(3);
        assert_eq!(
            board.place(3, 0, Player::One),
            Err(MoveError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = BoardState::new(3);
        board.place(1, 1, Player::One).unwrap();
        assert_eq!(
            board.place(1, 1, Player::Two),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(board.get(1, 1), Some(Cell::Taken(Player::One)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_set_and_clear_restore_board() {
        let mut board = BoardState::from_rows(&["X..", ".O.", "..."]);
        let before = board.clone();
        board.set(2, 2, Player::One);
        assert_eq!(board.occupied_count(), 3);
        board.clear(2, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_on_empty_cell_is_noop() {
        let mut board = BoardState::new(4);
        board.clear(0, 0);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_empty_cells_row_major_and_exhaustive() {
        let board = BoardState::from_rows(&["X.O", "...", "OX."]);
        let cells = board.empty_cells();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_is_full_and_reset() {
        let mut board = BoardState::from_rows(&["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
        board.reset();
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_repeated_place_keeps_full_check_exact() {
        let mut board = BoardState::new(3);
        for idx in 0..8 {
            let (row, col) = (idx / 3, idx % 3);
            board.place(row, col, Player::One).unwrap();
            assert!(board.place(row, col, Player::Two).is_err());
            assert!(board.place(0, 0, Player::Two).is_err());
        }
        assert_eq!(board.occupied_count(), 8);
        assert!(!board.is_full());
        board.place(2, 2, Player::Two).unwrap();
        assert!(board.is_full());
    }
}
