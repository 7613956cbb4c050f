use crate::types::Player;

/// Cumulative results for one controller; survives `new_game`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: [u32; 2],
    draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games_played(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.draws
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}
