use serde::{Deserialize, Serialize};

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::bot_controller::Difficulty;
use crate::error::ConfigError;
use crate::types::{Mark, Player};

pub const MIN_TIMER_SECONDS: u32 = 5;
pub const MAX_TIMER_SECONDS: u32 = 300;
pub const DEFAULT_TIMER_SECONDS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    PvP,
    PvC,
}

/// Validated, immutable game setup. A controller keeps its configuration for
/// its whole life; changed settings mean a new controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    size: usize,
    mode: GameMode,
    difficulty: Difficulty,
    marks: [Mark; 2],
    ai_starts: bool,
    timer_enabled: bool,
    timer_seconds: u32,
}

impl Configuration {
    pub fn new(
        size: usize,
        mode: GameMode,
        difficulty: Difficulty,
        player1_symbol: &str,
        player2_symbol: &str,
    ) -> Result<Self, ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(ConfigError::InvalidSize(size));
        }
        let first = Mark::new(player1_symbol, Player::One)?;
        let second = Mark::new(player2_symbol, Player::Two)?;
        if first == second {
            return Err(ConfigError::DuplicateSymbols(first.to_string()));
        }

        Ok(Self {
            size,
            mode,
            difficulty,
            marks: [first, second],
            ai_starts: false,
            timer_enabled: false,
            timer_seconds: DEFAULT_TIMER_SECONDS,
        })
    }

    pub fn with_ai_starts(mut self, ai_starts: bool) -> Self {
        self.ai_starts = ai_starts;
        self
    }

    pub fn with_timer(mut self, enabled: bool, seconds: u32) -> Result<Self, ConfigError> {
        if !(MIN_TIMER_SECONDS..=MAX_TIMER_SECONDS).contains(&seconds) {
            return Err(ConfigError::InvalidTimerSeconds(seconds));
        }
        self.timer_enabled = enabled;
        self.timer_seconds = seconds;
        Ok(self)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mark(&self, player: Player) -> &Mark {
        &self.marks[player.index()]
    }

    /// Only meaningful against the computer.
    pub fn ai_starts(&self) -> bool {
        self.ai_starts
    }

    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    pub fn timer_seconds(&self) -> u32 {
        self.timer_seconds
    }

    /// The computer always plays the second roster slot.
    pub fn computer_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::PvC => Some(Player::Two),
            GameMode::PvP => None,
        }
    }

    pub fn starting_player(&self) -> Player {
        if self.mode == GameMode::PvC && self.ai_starts {
            Player::Two
        } else {
            Player::One
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            size: MIN_SIZE,
            mode: GameMode::PvP,
            difficulty: Difficulty::Medium,
            marks: [
                Mark::new_unchecked("X"),
                Mark::new_unchecked("O"),
            ],
            ai_starts: false,
            timer_enabled: false,
            timer_seconds: DEFAULT_TIMER_SECONDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback() {
        let config = Configuration::default();
        assert_eq!(config.size(), 3);
        assert_eq!(config.mode(), GameMode::PvP);
        assert_eq!(config.difficulty(), Difficulty::Medium);
        assert_eq!(config.mark(Player::One).as_str(), "X");
        assert_eq!(config.mark(Player::Two).as_str(), "O");
        assert!(!config.timer_enabled());
    }

    #[test]
    fn test_rejects_size_out_of_range() {
        for size in [0, 2, 11] {
            assert_eq!(
                Configuration::new(size, GameMode::PvP, Difficulty::Easy, "X", "O"),
                Err(ConfigError::InvalidSize(size))
            );
        }
        assert!(Configuration::new(10, GameMode::PvP, Difficulty::Easy, "X", "O").is_ok());
    }

    #[test]
    fn test_rejects_identical_symbols() {
        assert_eq!(
            Configuration::new(3, GameMode::PvP, Difficulty::Easy, "AB", "AB"),
            Err(ConfigError::DuplicateSymbols("AB".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_second_symbol() {
        assert_eq!(
            Configuration::new(3, GameMode::PvP, Difficulty::Easy, "X", ""),
            Err(ConfigError::EmptySymbol { player: Player::Two })
        );
    }

    #[test]
    fn test_timer_bounds() {
        let base = Configuration::default();
        assert_eq!(
            base.clone().with_timer(true, 4),
            Err(ConfigError::InvalidTimerSeconds(4))
        );
        assert_eq!(
            base.clone().with_timer(true, 301),
            Err(ConfigError::InvalidTimerSeconds(301))
        );
        let config = base.with_timer(true, 5).unwrap();
        assert!(config.timer_enabled());
        assert_eq!(config.timer_seconds(), 5);
    }

    #[test]
    fn test_starting_player_depends_on_mode() {
        let pvc = Configuration::new(3, GameMode::PvC, Difficulty::Hard, "X", "O")
            .unwrap()
            .with_ai_starts(true);
        assert_eq!(pvc.starting_player(), Player::Two);
        assert_eq!(pvc.computer_player(), Some(Player::Two));

        let pvp = Configuration::default().with_ai_starts(true);
        assert_eq!(pvp.starting_player(), Player::One);
        assert_eq!(pvp.computer_player(), None);
    }
}
