use crate::debug_log;
use crate::error::GameError;
use crate::game_state::{
    DEFAULT_MAX_START_ATTEMPTS, DEFAULT_MIN_POOL_SIZE, GameConfig, GameInterface, GiveUpResult,
    GuessResult, StartResult, UserAction,
};
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, ErrorKind, Stdout, Write};
use std::path::PathBuf;

const MAX_CANDIDATES_DISPLAY: usize = 10;

/// Guess the Pokémon from the moves it can learn
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON file mapping each Pokémon to its learnable moves
    #[arg(short = 'i', long = "input")]
    pub learnset_path: Option<PathBuf>,

    /// Smallest candidate pool the opening clue may leave
    #[arg(long = "min-pool", default_value_t = DEFAULT_MIN_POOL_SIZE)]
    pub min_pool_size: usize,

    /// Random secrets to try before giving up on starting a game
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_START_ATTEMPTS)]
    pub max_start_attempts: usize,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Practice against a chosen Pokémon
    #[arg(long)]
    pub secret: Option<String>,

    /// Opening clue for --secret
    #[arg(long = "first-move", requires = "secret")]
    pub first_move: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Print one JSON object per result instead of text
    #[arg(long, conflicts_with = "tui")]
    pub json: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            min_pool_size: self.min_pool_size,
            max_start_attempts: self.max_start_attempts,
            seed: self.seed,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Turn one line of input into an action.
///
/// `?text` searches names, `giveup`, `next` and `exit` are commands, and
/// anything else is a guess.
#[must_use]
pub fn parse_action(input: &str) -> Option<UserAction> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some(query) = input.strip_prefix('?') {
        return Some(UserAction::Search(query.trim().to_string()));
    }
    match input.to_lowercase().as_str() {
        "exit" | "quit" => Some(UserAction::Exit),
        "next" => Some(UserAction::NewGame),
        "giveup" | "give up" => Some(UserAction::GiveUp),
        _ => Some(UserAction::Guess(input.to_string())),
    }
}

const PROMPT: &str =
    "Guess a Pokémon ('?text' to search, 'giveup', 'next' for a new game, 'exit' to quit):";
const BLANK_INPUT_HINT: &str = "Please enter a Pokémon name or a command.";

/// Read one line and turn it into an action.
///
/// End of input and read failures map to `Exit`. A line that is not valid
/// UTF-8 is consumed and returned as an `InvalidData` error so the caller
/// can report it and keep reading. `Ok(None)` means a blank line.
pub fn read_action<R: BufRead>(reader: &mut R) -> io::Result<Option<UserAction>> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Ok(Some(UserAction::Exit)),
        Ok(_) => Ok(parse_action(&input)),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(e),
        Err(e) => {
            debug_log!("read_action() - input failed: {}", e);
            Ok(Some(UserAction::Exit))
        }
    }
}

fn candidate_lines(count: usize, candidates: &[String]) -> Vec<String> {
    let mut lines = vec![format!("Possible Pokémon ({count})")];
    if count <= MAX_CANDIDATES_DISPLAY {
        lines.extend(candidates.iter().map(|name| format!("  {name}")));
    }
    lines
}

#[must_use]
pub fn start_lines(start: &StartResult) -> Vec<String> {
    let mut lines = vec![format!("New game! First clue: {}", start.revealed_move)];
    lines.extend(candidate_lines(start.candidate_count, &start.candidates));
    lines
}

#[must_use]
pub fn guess_lines(result: &GuessResult) -> Vec<String> {
    let mut lines = Vec::new();
    if result.is_correct_identity {
        lines.push(format!(
            "Congratulations! It was {}. You guessed the right Pokémon!",
            result.guess
        ));
    } else if result.guess_passes {
        lines.push(format!("{} fits every clue so far, but it's not the one.", result.guess));
    } else {
        lines.push(format!(
            "{} can't learn: {}",
            result.guess,
            result.missing_moves.join(", ")
        ));
    }

    if result.new_clue {
        lines.push(format!("Next clue: {}", result.revealed_move));
    } else if result.exhausted {
        lines.push("No more clues: every move has been revealed.".to_string());
    }
    lines.extend(candidate_lines(result.candidate_count, &result.candidates));
    lines
}

#[must_use]
pub fn give_up_lines(result: &GiveUpResult) -> Vec<String> {
    vec![
        format!("The Pokémon was {}.", result.secret),
        format!("Clues revealed: {}", result.clues.join(", ")),
        "Type 'next' to play again.".to_string(),
    ]
}

#[must_use]
pub fn suggestion_lines(query: &str, names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec![format!("No Pokémon match '{query}'.")];
    }
    let mut lines = vec![format!("Matches for '{query}' ({}):", names.len())];
    lines.extend(names.iter().map(|name| format!("  {name}")));
    lines
}

/// Line-oriented implementation of the `GameInterface` trait.
///
/// Text mode prints prompts and readable summaries. JSON mode writes exactly
/// one JSON object per line and nothing else.
pub struct CliInterface<R: BufRead, W: Write = Stdout> {
    reader: R,
    writer: W,
    format: OutputFormat,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self::with_format(reader, OutputFormat::Text)
    }

    pub fn with_format(reader: R, format: OutputFormat) -> Self {
        CliInterface::with_writer(reader, io::stdout(), format)
    }
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn with_writer(reader: R, writer: W, format: OutputFormat) -> Self {
        Self {
            reader,
            writer,
            format,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug_log!("CliInterface - write failed: {}", e);
        }
    }

    fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            self.write_line(line);
        }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => self.write_line(&line),
            Err(e) => eprintln!("Failed to encode result: {e}"),
        }
    }

    fn write_error(&mut self, message: &str) {
        match self.format {
            OutputFormat::Text => self.write_line(message),
            OutputFormat::Json => self.write_json(&json!({ "error": message })),
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_action(&mut self) -> Option<UserAction> {
        if self.format == OutputFormat::Text {
            self.write_line("");
            self.write_line(PROMPT);
            if let Err(e) = self.writer.flush() {
                debug_log!("CliInterface - flush failed: {}", e);
            }
        }
        match read_action(&mut self.reader) {
            Ok(Some(action)) => Some(action),
            Ok(None) => {
                if self.format == OutputFormat::Text {
                    self.write_line(BLANK_INPUT_HINT);
                }
                None
            }
            Err(e) => {
                self.write_error(&format!("Could not read input: {e}"));
                None
            }
        }
    }

    fn display_start(&mut self, start: &StartResult) {
        match self.format {
            OutputFormat::Text => self.write_lines(&start_lines(start)),
            OutputFormat::Json => self.write_json(start),
        }
    }

    fn display_guess(&mut self, result: &GuessResult) {
        match self.format {
            OutputFormat::Text => self.write_lines(&guess_lines(result)),
            OutputFormat::Json => self.write_json(result),
        }
    }

    fn display_suggestions(&mut self, query: &str, names: &[String]) {
        match self.format {
            OutputFormat::Text => self.write_lines(&suggestion_lines(query, names)),
            OutputFormat::Json => self.write_json(&json!({ "options": names })),
        }
    }

    fn display_give_up(&mut self, result: &GiveUpResult) {
        match self.format {
            OutputFormat::Text => self.write_lines(&give_up_lines(result)),
            OutputFormat::Json => self.write_json(result),
        }
    }

    fn display_error(&mut self, error: &GameError) {
        self.write_error(&error.to_string());
    }

    fn display_exit_message(&mut self) {
        if self.format == OutputFormat::Text {
            self.write_line("Exiting.");
        }
    }
}
