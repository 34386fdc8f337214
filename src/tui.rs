//! TUI (Terminal User Interface) module for Movedle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title, a table with one row per revealed clue (move, pool size, the
//! Pokémon guessed against it, and the moves that guess could not learn), an
//! information panel with suggestions and messages, the input line, a status
//! line and key help.
//!
//! # State Machine
//! - `EnteringGuess`: typing edits the guess and refreshes suggestions
//! - `GameOver`: after a correct guess or giving up, waits for a new game

use crate::error::GameError;
use crate::game_state::{GameInterface, GiveUpResult, GuessResult, StartResult, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_SUGGESTIONS_DISPLAY: usize = 8;
const MAX_CANDIDATES_DISPLAY: usize = 10;
const MAX_INPUT_LEN: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const MISS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// One revealed clue and the guess made while it was the newest.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueRow {
    move_name: String,
    count: usize,
    guess: Option<GuessMark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GuessMark {
    name: String,
    passes: bool,
    missing: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    rows: &'a [ClueRow],
    current_input: &'a str,
    state: TuiState,
    suggestions: &'a [String],
    candidates: &'a [String],
    candidate_count: usize,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Board contents, kept apart from the terminal so it can be updated in tests.
#[derive(Debug)]
struct Board {
    rows: Vec<ClueRow>,
    current_input: String,
    state: TuiState,
    suggestions: Vec<String>,
    candidates: Vec<String>,
    candidate_count: usize,
    message: String,
    error_message: String,
    status: String,
}

impl Board {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            suggestions: Vec::new(),
            candidates: Vec::new(),
            candidate_count: 0,
            message: String::new(),
            error_message: String::new(),
            status: "Starting a new game...".to_string(),
        }
    }

    fn apply_start(&mut self, start: &StartResult) {
        self.rows = vec![ClueRow {
            move_name: start.revealed_move.clone(),
            count: start.candidate_count,
            guess: None,
        }];
        self.current_input.clear();
        self.suggestions.clear();
        self.set_pool(start.candidate_count, &start.candidates);
        self.state = TuiState::EnteringGuess;
        self.message = format!("New game! First clue: {}", start.revealed_move);
        self.error_message.clear();
        self.status = "Type a Pokémon name".to_string();
    }

    fn apply_guess(&mut self, result: &GuessResult) {
        // The guess is judged against the clues shown so far, so it belongs
        // on the newest existing row.
        if let Some(row) = self.rows.last_mut() {
            row.guess = Some(GuessMark {
                name: result.guess.clone(),
                passes: result.guess_passes,
                missing: result.missing_moves.clone(),
            });
        }
        // Once exhausted the new row repeats the last clue.
        self.rows.push(ClueRow {
            move_name: result.revealed_move.clone(),
            count: result.candidate_count,
            guess: None,
        });
        self.set_pool(result.candidate_count, &result.candidates);
        self.suggestions.clear();
        self.error_message.clear();

        if result.is_correct_identity {
            self.state = TuiState::GameOver;
            self.message = format!(
                "Congratulations! It was {}. You guessed the right Pokémon!",
                result.guess
            );
            self.status = "Game Over - You win".to_string();
        } else if result.exhausted {
            self.message = "No more clues: every move has been revealed.".to_string();
            self.status = format!("{} Pokémon remain", result.candidate_count);
        } else {
            self.message = format!("Next clue: {}", result.revealed_move);
            self.status = format!("{} Pokémon remain", result.candidate_count);
        }
    }

    fn apply_give_up(&mut self, result: &GiveUpResult) {
        self.state = TuiState::GameOver;
        self.set_pool(result.candidate_count, &result.candidates);
        self.suggestions.clear();
        self.message = format!("The Pokémon was {}.", result.secret);
        self.status = "Game Over - Gave up".to_string();
    }

    fn set_pool(&mut self, count: usize, candidates: &[String]) {
        self.candidate_count = count;
        self.candidates = if count <= MAX_CANDIDATES_DISPLAY {
            candidates.to_vec()
        } else {
            Vec::new()
        };
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::GameOver => Self::handle_game_over_input(key),
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('g') if ctrl => {
                info_log!("handle_guess_input() - Ctrl+G, giving up");
                Some(UserAction::GiveUp)
            }
            KeyCode::Char('n') if ctrl => Some(UserAction::NewGame),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                debug_log!("handle_guess_input() - Ignoring key with modifier: {:?}", key.modifiers);
                None
            }
            KeyCode::Char(c) if !c.is_control() && self.current_input.chars().count() < MAX_INPUT_LEN => {
                self.current_input.push(c);
                Some(UserAction::Search(self.current_input.clone()))
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
                Some(UserAction::Search(self.current_input.clone()))
            }
            KeyCode::Tab => {
                let first = self.suggestions.first()?.clone();
                self.current_input = first;
                Some(UserAction::Search(self.current_input.clone()))
            }
            KeyCode::Enter if self.current_input.trim().is_empty() => {
                self.error_message = "Type a Pokémon name first!".to_string();
                None
            }
            KeyCode::Enter => {
                let guess = self.current_input.trim().to_string();
                self.current_input.clear();
                info_log!("handle_guess_input() - submitting guess '{}'", guess);
                Some(UserAction::Guess(guess))
            }
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn context(&self) -> RenderContext<'_> {
        RenderContext {
            rows: &self.rows,
            current_input: &self.current_input,
            state: self.state,
            suggestions: &self.suggestions,
            candidates: &self.candidates,
            candidate_count: self.candidate_count,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        }
    }
}

/// Main TUI interface component.
///
/// Manages terminal rendering and input, and implements `GameInterface`.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            board: Board::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = self.board.context();
        self.terminal.draw(|f| {
            render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - key code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(self.board.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_start(&mut self, start: &StartResult) {
        self.board.apply_start(start);
        self.draw_or_log();
    }

    fn display_guess(&mut self, result: &GuessResult) {
        self.board.apply_guess(result);
        self.draw_or_log();
    }

    fn display_suggestions(&mut self, _query: &str, names: &[String]) {
        self.board.suggestions = names.to_vec();
        self.draw_or_log();
    }

    fn display_give_up(&mut self, result: &GiveUpResult) {
        self.board.apply_give_up(result);
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &GameError) {
        self.board.error_message = error.to_string();
        if matches!(error, GameError::NoActiveGame | GameError::NoValidStartFound { .. }) {
            self.board.state = TuiState::GameOver;
            self.board.status = "Press N to try a new game".to_string();
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.board.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the complete UI layout using the provided context.
fn render_static(f: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(8),     // Clue table
            Constraint::Length(12), // Info panel
            Constraint::Length(3),  // Input
            Constraint::Length(3),  // Status line
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_clues(f, chunks[1], ctx.rows);
    render_info(f, chunks[2], ctx);
    render_input(f, chunks[3], ctx.current_input, ctx.state);
    render_status(f, chunks[4], ctx.status);
    render_instructions(f, chunks[5], ctx.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("MOVEDLE - Guess the Pokémon from its moves")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_clues(f: &mut Frame, area: Rect, rows: &[ClueRow]) {
    let header = Row::new(vec!["Clue", "Count", "Guessed Pokémon", "Missing Moves"])
        .style(HEADER_STYLE);

    // Show the newest rows when they don't all fit.
    let visible = usize::from(area.height.saturating_sub(3));
    let skip = rows.len().saturating_sub(visible);
    let body: Vec<Row> = rows.iter().skip(skip).map(clue_row).collect();

    let table = Table::new(
        body,
        [
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ],
    )
    .header(header)
    .block(Block::default().title("Clues").borders(Borders::ALL));
    f.render_widget(table, area);
}

fn clue_row(row: &ClueRow) -> Row<'static> {
    let (guess_cell, missing_cell) = match &row.guess {
        Some(mark) => {
            let style = if mark.passes { SUCCESS_STYLE } else { MISS_STYLE };
            (
                Cell::from(Span::styled(mark.name.clone(), style)),
                Cell::from(Span::styled(mark.missing.join(", "), MISS_STYLE)),
            )
        }
        None => (Cell::from(""), Cell::from("")),
    };
    Row::new(vec![
        Cell::from(row.move_name.clone()),
        Cell::from(row.count.to_string()),
        guess_cell,
        missing_cell,
    ])
}

fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut lines = Vec::new();

    if !ctx.suggestions.is_empty() {
        lines.push(Line::from(vec![Span::styled("Suggestions:", HEADER_STYLE)]));
        let shown: Vec<&str> = ctx
            .suggestions
            .iter()
            .take(MAX_SUGGESTIONS_DISPLAY)
            .map(String::as_str)
            .collect();
        let mut text = format!("  {}", shown.join(", "));
        if ctx.suggestions.len() > MAX_SUGGESTIONS_DISPLAY {
            text.push_str(&format!(
                " ... and {} more",
                ctx.suggestions.len() - MAX_SUGGESTIONS_DISPLAY
            ));
        }
        lines.push(Line::from(text));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        format!("Possible Pokémon: {}", ctx.candidate_count),
        INFO_STYLE,
    )]));
    if !ctx.candidates.is_empty() {
        lines.push(Line::from(format!("  {}", ctx.candidates.join(", "))));
    }
    lines.push(Line::from(""));

    if !ctx.message.is_empty() {
        lines.push(Line::from(vec![Span::styled(ctx.message, MESSAGE_STYLE)]));
    }
    if !ctx.error_message.is_empty() {
        lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => format!("> {current_input}_"),
        TuiState::GameOver => String::new(),
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Guess").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => {
            "ENTER: Guess | TAB: Complete | CTRL+G: Give up | CTRL+N: New game | ESC: Quit"
        }
        TuiState::GameOver => "N: New Game | ESC: Quit",
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn started_board() -> Board {
        let mut board = Board::new();
        board.apply_start(&StartResult {
            revealed_move: "Quick Attack".to_string(),
            candidate_count: 2,
            candidates: vec!["Bulb".to_string(), "Pika".to_string()],
        });
        board
    }

    fn guess(name: &str, correct: bool, new_clue: bool) -> GuessResult {
        GuessResult {
            guess: name.to_string(),
            guess_passes: true,
            missing_moves: Vec::new(),
            is_correct_identity: correct,
            revealed_move: "Thunder".to_string(),
            new_clue,
            exhausted: !new_clue,
            candidate_count: 1,
            candidates: vec!["Pika".to_string()],
        }
    }

    #[test]
    fn test_typing_requests_suggestions() {
        let mut board = started_board();
        assert_eq!(
            board.handle_key(key(KeyCode::Char('p'))),
            Some(UserAction::Search("p".to_string()))
        );
        assert_eq!(
            board.handle_key(key(KeyCode::Char('i'))),
            Some(UserAction::Search("pi".to_string()))
        );
        assert_eq!(
            board.handle_key(key(KeyCode::Backspace)),
            Some(UserAction::Search("p".to_string()))
        );
    }

    #[test]
    fn test_tab_completes_first_suggestion() {
        let mut board = started_board();
        assert_eq!(board.handle_key(key(KeyCode::Tab)), None);
        board.suggestions = vec!["Pika".to_string(), "Pikachu".to_string()];
        board.handle_key(key(KeyCode::Tab));
        assert_eq!(board.current_input, "Pika");
    }

    #[test]
    fn test_enter_submits_trimmed_guess() {
        let mut board = started_board();
        assert_eq!(board.handle_key(key(KeyCode::Enter)), None);
        assert!(!board.error_message.is_empty());
        board.current_input = " Pika ".to_string();
        assert_eq!(
            board.handle_key(key(KeyCode::Enter)),
            Some(UserAction::Guess("Pika".to_string()))
        );
        assert!(board.current_input.is_empty());
    }

    #[test]
    fn test_control_keys() {
        let mut board = started_board();
        assert_eq!(board.handle_key(ctrl('g')), Some(UserAction::GiveUp));
        assert_eq!(board.handle_key(ctrl('n')), Some(UserAction::NewGame));
        assert_eq!(board.handle_key(ctrl('x')), None);
        assert!(board.current_input.is_empty());
        assert_eq!(board.handle_key(key(KeyCode::Esc)), Some(UserAction::Exit));
    }

    #[test]
    fn test_guess_marks_row_and_adds_clue() {
        let mut board = started_board();
        board.apply_guess(&guess("Bulb", false, true));
        assert_eq!(board.rows.len(), 2);
        assert_eq!(board.rows[0].guess.as_ref().unwrap().name, "Bulb");
        assert_eq!(board.rows[1].move_name, "Thunder");
        assert!(board.rows[1].guess.is_none());
        assert_eq!(board.candidates, vec!["Pika"]);
        assert_eq!(board.state, TuiState::EnteringGuess);
    }

    #[test]
    fn test_correct_guess_ends_game() {
        let mut board = started_board();
        board.apply_guess(&guess("Pika", true, false));
        assert_eq!(board.state, TuiState::GameOver);
        assert!(board.message.starts_with("Congratulations!"));
        assert_eq!(
            board.handle_key(key(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
        assert_eq!(board.handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_give_up_shows_secret() {
        let mut board = started_board();
        board.apply_give_up(&GiveUpResult {
            secret: "Pika".to_string(),
            clues: vec!["Quick Attack".to_string()],
            candidate_count: 2,
            candidates: vec!["Bulb".to_string(), "Pika".to_string()],
        });
        assert_eq!(board.state, TuiState::GameOver);
        assert_eq!(board.message, "The Pokémon was Pika.");
    }

    #[test]
    fn test_large_pool_not_listed() {
        let mut board = Board::new();
        let names: Vec<String> = (0..50).map(|i| format!("Mon{i}")).collect();
        board.apply_start(&StartResult {
            revealed_move: "Tackle".to_string(),
            candidate_count: names.len(),
            candidates: names,
        });
        assert_eq!(board.candidate_count, 50);
        assert!(board.candidates.is_empty());
    }
}
