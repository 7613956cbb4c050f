use std::fmt;

use crate::types::Player;

/// Reasons a move request is refused. None of these are fatal: the board is
/// left untouched and the caller may simply try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize, size: usize },
    Occupied { row: usize, col: usize },
    GameOver,
    NotYourTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col, size } => write!(
                f,
                "Position ({}, {}) is outside the {}x{} board",
                row, col, size, size
            ),
            MoveError::Occupied { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Computer is on turn"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize(usize),
    EmptySymbol { player: Player },
    SymbolTooLong { player: Player, len: usize },
    DuplicateSymbols(String),
    InvalidTimerSeconds(u32),
    Parse(String),
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize(size) => {
                write!(f, "Board size must be between 3 and 10, got {}", size)
            }
            ConfigError::EmptySymbol { player } => {
                write!(f, "Symbol for {} must not be empty", player)
            }
            ConfigError::SymbolTooLong { player, len } => write!(
                f,
                "Symbol for {} must be at most 3 characters, got {}",
                player, len
            ),
            ConfigError::DuplicateSymbols(symbol) => {
                write!(f, "Both players use the symbol '{}'", symbol)
            }
            ConfigError::InvalidTimerSeconds(seconds) => write!(
                f,
                "Timer must be between 5 and 300 seconds, got {}",
                seconds
            ),
            ConfigError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::OutOfBounds { row: 3, col: 0, size: 3 };
        assert_eq!(err.to_string(), "Position (3, 0) is outside the 3x3 board");
        assert_eq!(
            MoveError::Occupied { row: 1, col: 2 }.to_string(),
            "Cell (1, 2) is already marked"
        );
    }

    #[test]
    fn test_config_error_names_player() {
        let err = ConfigError::EmptySymbol { player: Player::Two };
        assert_eq!(err.to_string(), "Symbol for player 2 must not be empty");
    }
}
