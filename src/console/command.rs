//! Console input parsing.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Move { from: String, to: String },
    Board,
    Moves(Option<String>),
    State,
    Turn,
    History,
    Random,
    New,
    Set { name: String, value: Option<String> },
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned = |i: usize| parts.get(i).map(|v| (*v).to_string());

    let cmd = match parts[0] {
        "move" if parts.len() == 3 => ConsoleCommand::Move {
            from: parts[1].to_string(),
            to: parts[2].to_string(),
        },
        "board" => ConsoleCommand::Board,
        "moves" => ConsoleCommand::Moves(owned(1)),
        "state" => ConsoleCommand::State,
        "turn" => ConsoleCommand::Turn,
        "history" => ConsoleCommand::History,
        "random" => ConsoleCommand::Random,
        "new" => ConsoleCommand::New,
        "set" if parts.len() >= 2 => ConsoleCommand::Set {
            name: parts[1].to_ascii_lowercase(),
            value: owned(2),
        },
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        from if parts.len() == 2 => ConsoleCommand::Move {
            from: from.to_string(),
            to: parts[1].to_string(),
        },
        // "e2e4" style
        word if parts.len() == 1 && word.len() == 4 && word.is_ascii() => ConsoleCommand::Move {
            from: word[..2].to_string(),
            to: word[2..].to_string(),
        },
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
