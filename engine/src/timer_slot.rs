use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduled callback. Tickets are unique across every slot
/// in the process, so a ticket can never be mistaken for one issued by
/// another timer or by a controller that has since been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket(u64);

impl TimerTicket {
    fn next() -> Self {
        TimerTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// One logical timer: arming it supersedes every earlier ticket and
/// cancelling it kills the live one, so a stale callback can always be told
/// apart from the current one.
#[derive(Debug, Default)]
pub struct TimerSlot {
    live: Option<TimerTicket>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) -> TimerTicket {
        let ticket = TimerTicket::next();
        self.live = Some(ticket);
        ticket
    }

    pub fn cancel(&mut self) {
        self.live = None;
    }

    pub fn is_live(&self, ticket: TimerTicket) -> bool {
        self.live == Some(ticket)
    }

    pub fn current(&self) -> Option<TimerTicket> {
        self.live
    }

    /// Consumes a one-shot ticket. Returns false for stale tickets.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if !self.is_live(ticket) {
            return false;
        }
        self.live = None;
        true
    }
}
