pub mod logger;

pub mod board;
pub mod bot_controller;
pub mod config;
pub mod error;
pub mod game_controller;
pub mod line_scanner;
pub mod minimax;
pub mod scoreboard;
pub mod session_rng;
pub mod timer_slot;
pub mod turn_clock;
pub mod types;

pub use board::BoardState;
pub use bot_controller::{Difficulty, calculate_move};
pub use config::{Configuration, GameMode, SettingsRecord};
pub use error::{ConfigError, MoveError};
pub use game_controller::{GameController, GameEvent, GameOutcome};
pub use line_scanner::{Line, WinningLine};
pub use minimax::MinimaxSearch;
pub use scoreboard::Scoreboard;
pub use session_rng::SessionRng;
pub use timer_slot::TimerTicket;
pub use turn_clock::{ClockState, TickOutcome, TurnClock};
pub use types::{Cell, Mark, Player, Position};
