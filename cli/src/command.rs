#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { row: usize, col: usize },
    NewGame,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "new" | "n" => return Ok(Command::NewGame),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(format!("Expected '<row> <col>', 'new' or 'quit', got '{}'", input));
    }

    let row = parts[0]
        .parse()
        .map_err(|_| format!("Invalid row '{}'", parts[0]))?;
    let col = parts[1]
        .parse()
        .map_err(|_| format!("Invalid column '{}'", parts[1]))?;
    Ok(Command::Move { row, col })
}
