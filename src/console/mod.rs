//! Line-oriented text console for playing a game from a terminal or a pipe.
//!
//! Every reply is a single line (diagrams aside), so the console can be
//! driven by scripts as well as by people.

pub mod command;
pub mod options;

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Square;
use crate::game::Game;

use command::{parse_console_command, ConsoleCommand};
use options::{ConsoleOptions, OptionAction};

const HELP: &str = "commands: <from> <to> | move <from> <to> | board | moves [square] | \
state | turn | history | random | new | set <board|coordinates|seed> <value> | quit";

/// Console session state: one game plus the session options.
pub struct Console<W: Write> {
    game: Game,
    options: ConsoleOptions,
    rng: StdRng,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, ConsoleOptions::default())
    }

    pub fn with_options(out: W, options: ConsoleOptions) -> Self {
        let rng = make_rng(options.seed);
        Console {
            game: Game::new(),
            options,
            rng,
            out,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Handle one input line. Returns `false` once the session should end.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let Some(cmd) = parse_console_command(line) else {
            return Ok(true);
        };
        debug!("console command {cmd:?}");

        match cmd {
            ConsoleCommand::Move { from, to } => self.play(&from, &to)?,
            ConsoleCommand::Board => self.print_board()?,
            ConsoleCommand::Moves(square) => self.print_moves(square.as_deref())?,
            ConsoleCommand::State => writeln!(self.out, "state {:?}", self.game.state())?,
            ConsoleCommand::Turn => writeln!(self.out, "turn {}", self.game.turn())?,
            ConsoleCommand::History => {
                let moves: Vec<String> =
                    self.game.history().iter().map(ToString::to_string).collect();
                writeln!(self.out, "history {}", moves.join(" "))?;
            }
            ConsoleCommand::Random => {
                let choice = self.game.legal_moves().choose(&mut self.rng).copied();
                match choice {
                    Some((from, to)) => self.play(&from.to_string(), &to.to_string())?,
                    None => writeln!(self.out, "error no moves available")?,
                }
            }
            ConsoleCommand::New => {
                self.game = Game::new();
                writeln!(self.out, "ok")?;
            }
            ConsoleCommand::Set { name, value } => {
                match self.options.apply(&name, value.as_deref()) {
                    Ok(action) => {
                        if let Some(OptionAction::ReseedRng(seed)) = action {
                            self.rng = make_rng(seed);
                        }
                        writeln!(self.out, "ok {}", self.options.describe())?;
                    }
                    Err(e) => writeln!(self.out, "error {e}")?,
                }
            }
            ConsoleCommand::Help => writeln!(self.out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(false),
            ConsoleCommand::Unknown(text) => {
                warn!("unrecognised console input: {text}");
                writeln!(self.out, "error unknown command '{text}'")?;
            }
        }
        self.out.flush()?;
        Ok(true)
    }

    fn play(&mut self, from: &str, to: &str) -> io::Result<()> {
        match self.game.try_move(from, to) {
            Ok(record) => {
                let line = match &record.explosion {
                    Some(explosion) => format!(
                        "ok {record} destroyed {}",
                        explosion.destroyed().len()
                    ),
                    None => format!("ok {record}"),
                };
                writeln!(self.out, "{line}")?;
            }
            Err(e) => {
                writeln!(self.out, "illegal {e}")?;
                return Ok(());
            }
        }

        if self.options.show_board {
            self.print_board()?;
        }
        if let Some(winner) = self.game.state().winner() {
            writeln!(self.out, "result {:?} ({winner} wins)", self.game.state())?;
        }
        Ok(())
    }

    fn print_board(&mut self) -> io::Result<()> {
        let snapshot = self.game.snapshot().with_labels(self.options.coordinates);
        write!(self.out, "{snapshot}")
    }

    fn print_moves(&mut self, square: Option<&str>) -> io::Result<()> {
        let pairs: Vec<(Square, Square)> = match square {
            Some(text) => match text.parse::<Square>() {
                Ok(from) => {
                    let mine = self.game.board().color_at(from) == Some(self.game.turn());
                    if mine && !self.game.state().is_over() {
                        self.game
                            .destinations(from)
                            .iter()
                            .map(|to| (from, to))
                            .collect()
                    } else {
                        Vec::new()
                    }
                }
                Err(e) => return writeln!(self.out, "error {e}"),
            },
            None => self.game.legal_moves(),
        };
        let text: Vec<String> = pairs.iter().map(|(f, t)| format!("{f}{t}")).collect();
        writeln!(self.out, "moves {}", text.join(" "))
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the console over stdin/stdout until `quit` or end of input.
pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(io::stdout().lock());
    writeln!(console.out, "atomic chess ready, type 'help' for commands")?;
    console.out.flush()?;

    for line in stdin.lock().lines() {
        if !console.handle_line(&line?)? {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> String {
        let mut console = Console::with_options(
            Vec::new(),
            ConsoleOptions {
                show_board: false,
                ..ConsoleOptions::default()
            },
        );
        for line in lines {
            if !console.handle_line(line).unwrap() {
                break;
            }
        }
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_move_and_turn() {
        let out = run(&["e2 e4", "turn", "e2e4"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ok Pe2-e4");
        assert_eq!(lines[1], "turn Black");
        assert!(lines[2].starts_with("illegal"));
    }

    #[test]
    fn test_moves_listing() {
        let out = run(&["moves g1", "moves e7"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "moves g1f3 g1h3");
        // Not White's piece
        assert_eq!(lines[1], "moves ");
    }

    #[test]
    fn test_quit_stops_processing() {
        let out = run(&["quit", "e2 e4"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_winning_line_reports_result() {
        // Scholar-style queen raid: Qxf7 blows up the e8 king
        let out = run(&["e2 e4", "e7 e5", "d1 h5", "a7 a6", "h5 f7", "state", "e2 e3"]);
        assert!(out.contains("result WhiteWon"));
        assert!(out.contains("state WhiteWon"));
        assert!(out.lines().last().unwrap().starts_with("illegal Game is over"));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = run(&["set seed 7", "random", "random"]);
        let b = run(&["set seed 7", "random", "random"]);
        assert_eq!(a, b);
        assert!(a.lines().nth(1).unwrap().starts_with("ok "));
    }

    #[test]
    fn test_bad_option() {
        let out = run(&["set hash 64"]);
        assert_eq!(out.trim(), "error unknown option 'hash'");
    }
}
