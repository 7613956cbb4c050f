use crate::timer_slot::{TimerSlot, TimerTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running(u32),
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a superseded sequence and was dropped.
    Stale,
    Counting(u32),
    Expired,
}

/// Per-turn countdown. Each start or reset begins a new tick sequence with
/// its own ticket; ticks carrying any other ticket are ignored.
#[derive(Debug)]
pub struct TurnClock {
    seconds: u32,
    state: ClockState,
    slot: TimerSlot,
}

impl TurnClock {
    pub fn new(seconds: u32) -> Self {
        Self {
            seconds,
            state: ClockState::Stopped,
            slot: TimerSlot::new(),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            ClockState::Running(n) => Some(n),
            _ => None,
        }
    }

    pub fn ticket(&self) -> Option<TimerTicket> {
        self.slot.current()
    }

    pub fn start(&mut self) -> TimerTicket {
        self.state = ClockState::Running(self.seconds);
        self.slot.arm()
    }

    /// Restarts the countdown after an accepted move. Does nothing unless
    /// the clock is running.
    pub fn reset(&mut self) -> Option<TimerTicket> {
        match self.state {
            ClockState::Running(_) => Some(self.start()),
            _ => None,
        }
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
        self.slot.cancel();
    }

    pub fn tick(&mut self, ticket: TimerTicket) -> TickOutcome {
        if !self.slot.is_live(ticket) {
            return TickOutcome::Stale;
        }
        match self.state {
            ClockState::Running(0) => {
                self.state = ClockState::Expired;
                self.slot.cancel();
                TickOutcome::Expired
            }
            ClockState::Running(n) => {
                self.state = ClockState::Running(n - 1);
                TickOutcome::Counting(n - 1)
            }
            ClockState::Stopped | ClockState::Expired => TickOutcome::Stale,
        }
    }
}
