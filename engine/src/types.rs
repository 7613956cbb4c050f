use std::fmt;

use crate::error::ConfigError;

pub const MAX_MARK_CHARS: usize = 3;

/// Roster slot. Cells and the turn order refer to players by slot; the
/// configured symbols are only looked up for display and scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(*player),
        }
    }
}

/// Symbol a player draws on the board, 1 to 3 characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mark(String);

impl Mark {
    pub fn new(symbol: &str, player: Player) -> Result<Self, ConfigError> {
        if symbol.trim().is_empty() {
            return Err(ConfigError::EmptySymbol { player });
        }
        let len = symbol.chars().count();
        if len > MAX_MARK_CHARS {
            return Err(ConfigError::SymbolTooLong { player, len });
        }
        Ok(Self(symbol.to_string()))
    }

    pub(crate) fn new_unchecked(symbol: &str) -> Self {
        Self(symbol.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_accepts_up_to_three_chars() {
        assert_eq!(Mark::new("X", Player::One).unwrap().as_str(), "X");
        assert_eq!(Mark::new("ABC", Player::One).unwrap().as_str(), "ABC");
        assert_eq!(Mark::new("★☆", Player::Two).unwrap().as_str(), "★☆");
    }

    #[test]
    fn test_mark_rejects_empty_and_long() {
        assert_eq!(
            Mark::new("", Player::Two),
            Err(ConfigError::EmptySymbol { player: Player::Two })
        );
        assert_eq!(
            Mark::new("   ", Player::One),
            Err(ConfigError::EmptySymbol { player: Player::One })
        );
        assert_eq!(
            Mark::new("ABCD", Player::One),
            Err(ConfigError::SymbolTooLong { player: Player::One, len: 4 })
        );
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::Two.index(), 1);
    }
}
