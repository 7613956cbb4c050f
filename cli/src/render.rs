use tictactoe_engine::{Cell, GameController, GameMode, GameOutcome, Player};

const CELL_WIDTH: usize = 3;

pub fn render_board(controller: &GameController) -> String {
    let board = controller.board();
    let size = board.size();
    let highlighted = match controller.outcome() {
        GameOutcome::Won(line) => line.cells.clone(),
        _ => Vec::new(),
    };

    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!(" {:^width$}", col, width = CELL_WIDTH));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:>2} ", row));
        for col in 0..size {
            let symbol = match board.get(row, col) {
                Some(Cell::Taken(player)) => controller.mark(player).to_string(),
                _ => ".".to_string(),
            };
            let is_winning = highlighted.iter().any(|p| p.row == row && p.col == col);
            if is_winning {
                out.push_str(&format!("[{:^width$}", symbol, width = CELL_WIDTH - 1));
                out.push(']');
            } else {
                out.push_str(&format!(" {:^width$}", symbol, width = CELL_WIDTH));
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_status(controller: &GameController) -> String {
    let scores = controller.scoreboard();
    let score_line = format!(
        "Score: {} - {} | {} - {} | Draws - {}",
        controller.mark(Player::One),
        scores.wins(Player::One),
        controller.mark(Player::Two),
        scores.wins(Player::Two),
        scores.draws()
    );

    let state_line = match controller.outcome() {
        GameOutcome::InProgress => {
            let clock = controller
                .clock()
                .remaining()
                .map(|n| format!(" ({}s left)", n))
                .unwrap_or_default();
            format!("Turn: {}{}", controller.active_mark(), clock)
        }
        GameOutcome::Won(line) => format!("{} wins!", controller.mark(line.player)),
        GameOutcome::Draw => "Draw!".to_string(),
        GameOutcome::TimedOut { forfeited, winner } => format!(
            "{} ran out of time, {} wins!",
            controller.mark(*forfeited),
            controller.mark(*winner)
        ),
    };

    format!("{}\n{}\n{}", state_line, score_line, render_mode(controller))
}

fn render_mode(controller: &GameController) -> String {
    let config = controller.config();
    let size = config.size();
    match config.mode() {
        GameMode::PvP => format!("Mode: Player vs Player | Board: {}x{}", size, size),
        GameMode::PvC => format!(
            "Mode: Player vs Computer | Board: {}x{} | Difficulty: {:?}",
            size,
            size,
            config.difficulty()
        ),
    }
}
