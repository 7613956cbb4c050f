use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, Interval, MissedTickBehavior};

use tictactoe_engine::{GameController, GameEvent, TickOutcome, TimerTicket, log};

use crate::command::{Command, parse_command};
use crate::render::{render_board, render_status};

const CLOCK_WARNING_SECONDS: u32 = 5;

/// Tickets the loop is currently waiting on. At most one of each kind; a new
/// event from the controller replaces the old ticket.
#[derive(Default)]
struct Pending {
    clock: Option<TimerTicket>,
    computer: Option<(TimerTicket, Instant)>,
}

impl Pending {
    fn apply(&mut self, events: Vec<GameEvent>, tick_timer: &mut Interval) {
        for event in events {
            match event {
                GameEvent::GameStarted { .. } => {
                    self.clock = None;
                    self.computer = None;
                }
                GameEvent::ClockStarted { ticket, .. } => {
                    self.clock = Some(ticket);
                    tick_timer.reset();
                }
                GameEvent::ClockStopped => self.clock = None,
                GameEvent::ComputerMoveScheduled { ticket, delay } => {
                    self.computer = Some((ticket, Instant::now() + delay));
                }
                GameEvent::GameOver(_) => self.computer = None,
                GameEvent::MoveApplied { .. } => {}
            }
        }
    }
}

async fn computer_due(pending: Option<(TimerTicket, Instant)>) -> TimerTicket {
    match pending {
        Some((ticket, at)) => {
            tokio::time::sleep_until(at).await;
            ticket
        }
        None => std::future::pending().await,
    }
}

fn redraw(controller: &GameController) {
    println!("\n{}{}", render_board(controller), render_status(controller));
    if !controller.outcome().is_terminal() && !controller.is_computer_turn() {
        println!("Enter '<row> <col>', 'new' or 'quit':");
    }
}

pub async fn run(mut controller: GameController) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick_timer = tokio::time::interval(Duration::from_secs(1));
    tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut pending = Pending::default();
    pending.apply(controller.drain_events(), &mut tick_timer);
    redraw(&controller);

    loop {
        let mut changed = false;

        tokio::select! {
            _ = tick_timer.tick(), if pending.clock.is_some() => {
                if let Some(ticket) = pending.clock {
                    match controller.tick(ticket) {
                        TickOutcome::Counting(n) if n <= CLOCK_WARNING_SECONDS => {
                            println!("{}s left for {}", n, controller.active_mark());
                        }
                        TickOutcome::Expired => changed = true,
                        TickOutcome::Counting(_) | TickOutcome::Stale => {}
                    }
                }
            }
            ticket = computer_due(pending.computer) => {
                pending.computer = None;
                if let Some(pos) = controller.play_computer_move(ticket) {
                    println!("Computer plays {}", pos);
                    changed = true;
                }
            }
            line = lines.next_line() => {
                let Some(text) = line? else {
                    break;
                };
                match parse_command(&text) {
                    Ok(Command::Quit) => break,
                    Ok(Command::NewGame) => {
                        controller.new_game();
                        changed = true;
                    }
                    Ok(Command::Move { row, col }) => match controller.submit_move(row, col) {
                        Ok(()) => changed = true,
                        Err(e) => println!("{}", e),
                    },
                    Err(e) => println!("{}", e),
                }
            }
        }

        pending.apply(controller.drain_events(), &mut tick_timer);
        if changed {
            redraw(&controller);
        }
    }

    log!(
        "Session finished after {} games",
        controller.scoreboard().games_played()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{Configuration, Difficulty, GameMode, Player, SessionRng};

    fn timed_pvc() -> GameController {
        let config = Configuration::new(3, GameMode::PvC, Difficulty::Easy, "X", "O")
            .unwrap()
            .with_ai_starts(true)
            .with_timer(true, 10)
            .unwrap();
        GameController::new(config, SessionRng::new(1))
    }

    #[tokio::test]
    async fn test_pending_tracks_clock_and_computer_tickets() {
        let mut controller = timed_pvc();
        let mut tick_timer = tokio::time::interval(Duration::from_secs(1));
        let mut pending = Pending::default();

        pending.apply(controller.drain_events(), &mut tick_timer);
        let clock = controller.clock().ticket();
        assert!(clock.is_some());
        assert_eq!(pending.clock, clock);
        let (computer, _) = pending.computer.unwrap();
        assert_eq!(Some(computer), controller.pending_computer_move());

        controller.on_timeout().unwrap();
        pending.apply(controller.drain_events(), &mut tick_timer);
        assert_eq!(pending.clock, None);
        assert!(pending.computer.is_none());

        controller.new_game();
        pending.apply(controller.drain_events(), &mut tick_timer);
        assert!(pending.clock.is_some());
        assert_ne!(pending.clock, clock);
        assert_eq!(pending.clock, controller.clock().ticket());
        let (fresh, _) = pending.computer.unwrap();
        assert_ne!(fresh, computer);
    }

    #[tokio::test]
    async fn test_game_started_clears_stale_tickets() {
        let mut tick_timer = tokio::time::interval(Duration::from_secs(1));
        let mut controller = timed_pvc();
        let mut pending = Pending::default();
        pending.apply(controller.drain_events(), &mut tick_timer);

        pending.apply(
            vec![GameEvent::GameStarted { first: Player::One }],
            &mut tick_timer,
        );
        assert_eq!(pending.clock, None);
        assert!(pending.computer.is_none());

        let ticket = controller.clock().ticket().unwrap();
        pending.apply(
            vec![GameEvent::ClockStarted { ticket, seconds: 10 }, GameEvent::ClockStopped],
            &mut tick_timer,
        );
        assert_eq!(pending.clock, None);
    }
}
