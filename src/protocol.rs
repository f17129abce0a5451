//! Line-oriented text protocol for playing against the engine.
//!
//! The framing follows GTP: each command may carry a numeric id, responses
//! start with `=` on success or `?` on failure, echo the id, and end with a
//! blank line. Blank lines and `#` comments are skipped.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `new` - Start a new game from the standard position
//! - `position <fen>` - Start a new game from a FEN string
//! - `fen` - Print the current position as FEN
//! - `show` - Print the board
//! - `legal [square]` - List legal moves, optionally only from one square
//! - `play <move>` - Play a move in SAN or coordinate notation; in auto mode
//!   the computer answers straight away
//! - `go` - Let the computer move for the side to move
//! - `undo` - Take back the last move pair
//! - `status` - `ongoing`, `checkmate`, `stalemate` or `draw`
//! - `difficulty [level]` - Show or set `easy`, `medium` or `hard`
//! - `auto [on|off]` - Show or set automatic replies
//!
//! ## Example
//!
//! ```ignore
//! use rookie_chess::protocol::Session;
//! let mut session = Session::new();
//! session.run();
//! ```

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::difficulty::Difficulty;
use crate::position::Game;
use crate::rules::{GameStatus, Rules, RulesError, Square};
use crate::selector::Opponent;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "auto",
    "difficulty",
    "fen",
    "go",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "new",
    "play",
    "position",
    "quit",
    "show",
    "status",
    "undo",
    "version",
];

/// Session state: the game and the computer player.
pub struct Session {
    /// Current game
    game: Game,
    /// Computer player
    opponent: Opponent,
    /// Reply automatically after each `play`
    auto: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session at the starting position with a medium opponent.
    pub fn new() -> Self {
        Self::with_opponent(Game::new(), Opponent::default())
    }

    /// A session with a given game and opponent.
    pub fn with_opponent(game: Game, opponent: Opponent) -> Self {
        Self {
            game,
            opponent,
            auto: true,
        }
    }

    /// Turn automatic replies after `play` on or off.
    pub fn set_auto(&mut self, auto: bool) {
        self.auto = auto;
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let (command, args) = match command_line.split_once(char::is_whitespace) {
                Some((command, args)) => (command.to_lowercase(), args.trim()),
                None => (command_line.to_lowercase(), ""),
            };
            if command.is_empty() {
                continue;
            }

            debug!("command {command:?} args {args:?}");
            let (success, message) = self.execute(&command, args);
            if !success {
                warn!("{command} failed: {message}");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &str) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new" => {
                self.game = Game::new();
                (true, String::new())
            }

            "position" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match Game::from_fen(args) {
                    Ok(game) => {
                        self.game = game;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "fen" => (true, self.game.fen()),

            "show" => (true, format!("\n{}", self.game)),

            "legal" => {
                let origin = if args.is_empty() {
                    None
                } else {
                    match args.parse::<Square>() {
                        Ok(sq) => Some(sq),
                        Err(err) => return (false, err.to_string()),
                    }
                };
                let moves: Vec<String> = self
                    .game
                    .legal_moves(origin)
                    .iter()
                    .map(|mv| self.game.san(mv))
                    .collect();
                (true, moves.join(" "))
            }

            "play" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                if self.game.status().is_over() {
                    return (false, format!("game over: {}", self.game.status()));
                }
                let mv = match self.game.parse_move(args) {
                    Ok(mv) => mv,
                    Err(err) => return (false, err.to_string()),
                };
                if let Err(err) = self.game.apply_move(&mv) {
                    return (false, err.to_string());
                }
                if self.auto && !self.game.status().is_over() {
                    self.reply()
                } else {
                    (true, String::new())
                }
            }

            "go" => self.reply(),

            "undo" => match self.game.undo_pair() {
                Ok(n) => (true, n.to_string()),
                Err(err) => (false, err.to_string()),
            },

            "status" => (true, self.game.status().to_string()),

            "difficulty" => {
                if !args.is_empty() {
                    self.opponent.set_difficulty(Difficulty::from_name(args));
                }
                (true, self.opponent.difficulty().to_string())
            }

            "auto" => {
                match args.to_lowercase().as_str() {
                    "" => {}
                    "on" => self.auto = true,
                    "off" => self.auto = false,
                    other => return (false, format!("expected on or off, got {other}")),
                }
                (true, if self.auto { "on" } else { "off" }.to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Let the computer move. Responds with the move in SAN, or with the
    /// game status when there is nothing to play.
    fn reply(&mut self) -> (bool, String) {
        eprintln!("thinking...");
        match self.computer_move() {
            Ok(Some(san)) => (true, san),
            Ok(None) => (true, self.game.status().to_string()),
            Err(err) => (false, err.to_string()),
        }
    }

    fn computer_move(&mut self) -> Result<Option<String>, RulesError> {
        if self.game.status() != GameStatus::Ongoing {
            return Ok(None);
        }
        let Some(decision) = self.opponent.choose(&mut self.game)? else {
            return Ok(None);
        };
        let san = self.game.san(&decision.mv);
        self.game.apply_move(&decision.mv)?;
        Ok(Some(san))
    }
}
