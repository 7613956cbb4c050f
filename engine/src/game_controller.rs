use std::time::Duration;

use crate::board::BoardState;
use crate::bot_controller::calculate_move;
use crate::config::Configuration;
use crate::error::MoveError;
use crate::line_scanner::{WinningLine, is_draw, winner};
use crate::log;
use crate::scoreboard::Scoreboard;
use crate::session_rng::SessionRng;
use crate::timer_slot::{TimerSlot, TimerTicket};
use crate::turn_clock::{TickOutcome, TurnClock};
use crate::types::{Mark, Player, Position};

pub const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);
pub const COMPUTER_OPENING_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(WinningLine),
    Draw,
    TimedOut { forfeited: Player, winner: Player },
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(line) => Some(line.player),
            GameOutcome::TimedOut { winner, .. } => Some(*winner),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

/// Notifications for the presentation layer, collected in order and handed
/// out by `drain_events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted { first: Player },
    MoveApplied { player: Player, position: Position, by_computer: bool },
    ClockStarted { ticket: TimerTicket, seconds: u32 },
    ClockStopped,
    ComputerMoveScheduled { ticket: TimerTicket, delay: Duration },
    GameOver(GameOutcome),
}

/// Runs one engine session: turn order, computer replies, turn clock and the
/// cumulative scoreboard. All methods run to completion; delayed work (ticks
/// and computer moves) is handed to the caller as tickets and comes back
/// through `tick` and `play_computer_move`.
pub struct GameController {
    config: Configuration,
    board: BoardState,
    active: Player,
    outcome: GameOutcome,
    scoreboard: Scoreboard,
    clock: TurnClock,
    computer_move: TimerSlot,
    rng: SessionRng,
    last_move: Option<Position>,
    events: Vec<GameEvent>,
}

impl GameController {
    pub fn new(config: Configuration, rng: SessionRng) -> Self {
        let mut controller = Self {
            board: BoardState::new(config.size()),
            active: config.starting_player(),
            outcome: GameOutcome::InProgress,
            scoreboard: Scoreboard::new(),
            clock: TurnClock::new(config.timer_seconds()),
            computer_move: TimerSlot::new(),
            rng,
            last_move: None,
            events: Vec::new(),
            config,
        };
        controller.new_game();
        controller
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn active_mark(&self) -> &Mark {
        self.config.mark(self.active)
    }

    pub fn mark(&self, player: Player) -> &Mark {
        self.config.mark(player)
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn pending_computer_move(&self) -> Option<TimerTicket> {
        self.computer_move.current()
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.config.computer_player() == Some(self.active)
    }

    /// Hands out every event queued since the last call. The queue is only
    /// emptied here, so a driver must drain it after each call into the
    /// controller.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Clears the board and restarts turn order and clock. Scores are kept.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.active = self.config.starting_player();
        self.outcome = GameOutcome::InProgress;
        self.last_move = None;
        self.computer_move.cancel();
        self.clock.stop();

        self.events.push(GameEvent::GameStarted { first: self.active });
        if self.config.timer_enabled() {
            let ticket = self.clock.start();
            self.events.push(GameEvent::ClockStarted {
                ticket,
                seconds: self.clock.seconds(),
            });
        }
        if self.is_computer_turn() {
            self.schedule_computer_move(COMPUTER_OPENING_DELAY);
        }

        log!(
            "New game on {}x{} board, {} ({}) moves first",
            self.config.size(),
            self.config.size(),
            self.active,
            self.active_mark()
        );
    }

    /// Human move for the player on turn.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let result = if self.is_computer_turn() {
            Err(MoveError::NotYourTurn)
        } else {
            self.apply_move(row, col, false)
        };

        if let Err(ref e) = result {
            log!("Rejected move at ({}, {}) for {}: {}", row, col, self.active, e);
        }
        result
    }

    /// Delivers a scheduled computer move. Returns `None` when the ticket was
    /// superseded by a new game, a terminal outcome or a later schedule.
    pub fn play_computer_move(&mut self, ticket: TimerTicket) -> Option<Position> {
        if !self.computer_move.fire(ticket) || !self.is_computer_turn() {
            return None;
        }

        let ai = self.active;
        let pos = calculate_move(self.config.difficulty(), &mut self.board, ai, &mut self.rng);
        match self.apply_move(pos.row, pos.col, true) {
            Ok(()) => Some(pos),
            Err(e) => {
                log!("Computer move at {} was rejected: {}", pos, e);
                None
            }
        }
    }

    pub fn tick(&mut self, ticket: TimerTicket) -> TickOutcome {
        let outcome = self.clock.tick(ticket);
        if outcome == TickOutcome::Expired {
            if let Err(e) = self.on_timeout() {
                log!("Clock expired outside a running game: {}", e);
            }
        }
        outcome
    }

    /// The player on turn ran out of time and forfeits to the opponent.
    pub fn on_timeout(&mut self) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let forfeited = self.active;
        let winner = forfeited.opponent();
        self.scoreboard.record_win(winner);
        self.finish(GameOutcome::TimedOut { forfeited, winner });
        Ok(())
    }

    fn apply_move(&mut self, row: usize, col: usize, by_computer: bool) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.active;
        self.board.place(row, col, player)?;
        let position = Position::new(row, col);
        self.last_move = Some(position);
        self.events.push(GameEvent::MoveApplied {
            player,
            position,
            by_computer,
        });

        if let Some(ticket) = self.clock.reset() {
            self.events.push(GameEvent::ClockStarted {
                ticket,
                seconds: self.clock.seconds(),
            });
        }

        if let Some(line) = winner(&self.board, player) {
            self.scoreboard.record_win(player);
            self.finish(GameOutcome::Won(line));
        } else if is_draw(&self.board) {
            self.scoreboard.record_draw();
            self.finish(GameOutcome::Draw);
        } else {
            self.active = player.opponent();
            if self.is_computer_turn() {
                self.schedule_computer_move(COMPUTER_MOVE_DELAY);
            }
        }

        Ok(())
    }

    fn schedule_computer_move(&mut self, delay: Duration) {
        let ticket = self.computer_move.arm();
        self.events.push(GameEvent::ComputerMoveScheduled { ticket, delay });
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.clock.stop();
        self.computer_move.cancel();
        if self.config.timer_enabled() {
            self.events.push(GameEvent::ClockStopped);
        }

        match &outcome {
            GameOutcome::Won(line) => log!(
                "{} ({}) wins with {:?}",
                line.player,
                self.config.mark(line.player),
                line.line
            ),
            GameOutcome::Draw => log!("Game ended in a draw"),
            GameOutcome::TimedOut { forfeited, winner } => log!(
                "{} ran out of time, {} ({}) wins",
                forfeited,
                winner,
                self.config.mark(*winner)
            ),
            GameOutcome::InProgress => {}
        }

        self.outcome = outcome.clone();
        self.events.push(GameEvent::GameOver(outcome));
    }
}
