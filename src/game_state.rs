use crate::error::{GameError, GameResult};
use crate::learnset::Learnsets;
use crate::pool::{compute_pool, pool_size, search_names};
use crate::selector::{MoveChoice, select_next_move};
use crate::{debug_log, info_log};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::sync::Arc;

pub const DEFAULT_MIN_POOL_SIZE: usize = 600;
pub const DEFAULT_MAX_START_ATTEMPTS: usize = 1000;

/// Tunables for starting games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Smallest acceptable pool after the opening clue.
    pub min_pool_size: usize,
    /// How many random secrets to try before giving up on a start.
    pub max_start_attempts: usize,
    /// Seed for reproducible games; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            max_start_attempts: DEFAULT_MAX_START_ATTEMPTS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartResult {
    pub revealed_move: String,
    pub candidate_count: usize,
    pub candidates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessResult {
    pub guess: String,
    /// The guessed Pokémon learns every clue revealed before this guess.
    pub guess_passes: bool,
    /// Clues the guessed Pokémon cannot learn, in reveal order.
    pub missing_moves: Vec<String>,
    pub is_correct_identity: bool,
    /// Latest clue. Repeats the previous one once the secret is exhausted.
    pub revealed_move: String,
    /// Whether this guess revealed a new clue.
    pub new_clue: bool,
    pub exhausted: bool,
    pub candidate_count: usize,
    pub candidates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiveUpResult {
    pub secret: String,
    pub clues: Vec<String>,
    pub candidate_count: usize,
    pub candidates: Vec<String>,
}

#[derive(Debug)]
struct ActiveGame {
    secret: String,
    clues: Vec<String>,
    guesses: Vec<String>,
    exhausted: bool,
}

impl ActiveGame {
    fn last_revealed(&self) -> &str {
        self.clues.last().map_or("", String::as_str)
    }
}

/// One game of move deduction over a shared learnset store.
///
/// Every operation takes `&mut self`, so a session evaluates one guess at a
/// time. Independent sessions can share the same `Arc<Learnsets>`.
pub struct GameSession {
    learnsets: Arc<Learnsets>,
    config: GameConfig,
    rng: StdRng,
    game: Option<ActiveGame>,
}

impl GameSession {
    #[must_use]
    pub fn new(learnsets: Arc<Learnsets>, config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            learnsets,
            config,
            rng,
            game: None,
        }
    }

    #[must_use]
    pub fn learnsets(&self) -> &Arc<Learnsets> {
        &self.learnsets
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    #[must_use]
    pub fn clues(&self) -> &[String] {
        self.game
            .as_ref()
            .map(|game| game.clues.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn guesses(&self) -> &[String] {
        self.game
            .as_ref()
            .map(|game| game.guesses.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn candidate_count(&self) -> Option<usize> {
        self.game
            .as_ref()
            .map(|game| pool_size(&game.clues, &self.learnsets))
    }

    /// Start a new game with a random secret whose opening clue leaves at
    /// least `min_pool_size` candidates.
    ///
    /// The current game is discarded first, so a failed start leaves no game
    /// active.
    pub fn start_game(&mut self) -> GameResult<StartResult> {
        self.game = None;
        let learnsets = Arc::clone(&self.learnsets);
        let eligible: Vec<&str> = learnsets
            .iter()
            .filter(|(_, learnset)| !learnset.moves().is_empty())
            .map(|(name, _)| name)
            .collect();

        let min_pool_size = self.config.min_pool_size;
        let max_attempts = self.config.max_start_attempts;
        if eligible.is_empty() {
            return Err(GameError::NoValidStartFound {
                attempts: 0,
                min_pool_size,
            });
        }

        for attempt in 1..=max_attempts {
            let Some(&secret) = eligible.choose(&mut self.rng) else {
                break;
            };
            let secret_moves = learnsets.moves(secret).unwrap_or_default();
            let Some(first_move) =
                select_next_move(secret_moves, &[], &learnsets, &mut self.rng).into_move()
            else {
                continue;
            };

            let size = pool_size(&[first_move.as_str()], &learnsets);
            if size >= min_pool_size {
                info_log!(
                    "start_game() - accepted attempt {}: opening clue '{}' leaves {} candidates",
                    attempt,
                    first_move,
                    size
                );
                return Ok(self.begin(secret.to_string(), first_move));
            }
            debug_log!(
                "start_game() - attempt {} rejected: '{}' leaves {} < {}",
                attempt,
                first_move,
                size,
                min_pool_size
            );
        }

        info_log!("start_game() - no valid start after {} attempts", max_attempts);
        Err(GameError::NoValidStartFound {
            attempts: max_attempts,
            min_pool_size,
        })
    }

    /// Start a game with a chosen secret.
    ///
    /// With `first_move` unset the opening clue is picked the usual way. The
    /// minimum pool size is not enforced.
    pub fn start_game_with(
        &mut self,
        secret: &str,
        first_move: Option<&str>,
    ) -> GameResult<StartResult> {
        let learnsets = Arc::clone(&self.learnsets);
        let secret_moves = learnsets
            .moves(secret)
            .ok_or_else(|| GameError::UnknownName(secret.to_string()))?;

        let first_move = match first_move {
            Some(m) if learnsets.learns(secret, m) => m.to_string(),
            Some(m) => {
                return Err(GameError::MoveNotLearnable {
                    name: secret.to_string(),
                    move_name: m.to_string(),
                });
            }
            None => select_next_move(secret_moves, &[], &learnsets, &mut self.rng)
                .into_move()
                .ok_or(GameError::NoValidStartFound {
                    attempts: 1,
                    min_pool_size: self.config.min_pool_size,
                })?,
        };

        info_log!("start_game_with() - forced start, opening clue '{}'", first_move);
        Ok(self.begin(secret.to_string(), first_move))
    }

    fn begin(&mut self, secret: String, first_move: String) -> StartResult {
        let game = ActiveGame {
            secret,
            clues: vec![first_move.clone()],
            guesses: Vec::new(),
            exhausted: false,
        };
        let candidates = owned_pool(&game.clues, &self.learnsets);
        self.game = Some(game);
        StartResult {
            revealed_move: first_move,
            candidate_count: candidates.len(),
            candidates,
        }
    }

    /// Check `name` against the clues so far, then reveal the next clue.
    ///
    /// Unknown names are rejected before anything changes.
    pub fn submit_guess(&mut self, name: &str) -> GameResult<GuessResult> {
        let learnsets = Arc::clone(&self.learnsets);
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        let guessed = learnsets
            .get(name)
            .ok_or_else(|| GameError::UnknownName(name.to_string()))?;

        let missing_moves: Vec<String> = game
            .clues
            .iter()
            .filter(|m| !guessed.learns(m))
            .cloned()
            .collect();
        let guess_passes = missing_moves.is_empty();
        let is_correct_identity = game.secret == name;
        game.guesses.push(name.to_string());
        info_log!(
            "submit_guess() - '{}' passes={} missing={:?}",
            name,
            guess_passes,
            missing_moves
        );

        let mut new_clue = false;
        if !game.exhausted {
            let secret_moves = learnsets.moves(&game.secret).unwrap_or_default();
            match select_next_move(secret_moves, &game.clues, &learnsets, &mut self.rng) {
                MoveChoice::Reducing(m) | MoveChoice::Fallback(m) => {
                    debug_log!("submit_guess() - revealing '{}'", m);
                    game.clues.push(m);
                    new_clue = true;
                }
                MoveChoice::Exhausted => {
                    info_log!("submit_guess() - secret has no moves left to reveal");
                    game.exhausted = true;
                }
            }
        }

        let candidates = owned_pool(&game.clues, &learnsets);
        Ok(GuessResult {
            guess: name.to_string(),
            guess_passes,
            missing_moves,
            is_correct_identity,
            revealed_move: game.last_revealed().to_string(),
            new_clue,
            exhausted: game.exhausted,
            candidate_count: candidates.len(),
            candidates,
        })
    }

    /// Reveal the secret and end the current game.
    pub fn give_up(&mut self) -> GameResult<GiveUpResult> {
        let game = self.game.take().ok_or(GameError::NoActiveGame)?;
        info_log!("give_up() - revealing secret after {} guesses", game.guesses.len());
        let candidates = owned_pool(&game.clues, &self.learnsets);
        Ok(GiveUpResult {
            secret: game.secret,
            clues: game.clues,
            candidate_count: candidates.len(),
            candidates,
        })
    }

    /// Autocomplete options for `query`, minus names already guessed this game.
    #[must_use]
    pub fn suggest_names(&self, query: &str) -> Vec<String> {
        let guesses = self.guesses();
        search_names(&self.learnsets, query)
            .into_iter()
            .filter(|name| !guesses.contains(name))
            .collect()
    }
}

fn owned_pool(clues: &[String], learnsets: &Learnsets) -> Vec<String> {
    compute_pool(clues, learnsets)
        .into_iter()
        .map(str::to_string)
        .collect()
}

// Interface between the game loop and a front end

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Search(String),
    GiveUp,
    NewGame,
    Exit,
}

/// A front end the game loop can drive.
pub trait GameInterface {
    /// Next player action, or `None` if the input was not usable.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_start(&mut self, start: &StartResult);

    fn display_guess(&mut self, result: &GuessResult);

    fn display_suggestions(&mut self, query: &str, names: &[String]);

    fn display_give_up(&mut self, result: &GiveUpResult);

    fn display_error(&mut self, error: &GameError);

    fn display_exit_message(&mut self);
}

/// Run games on `session` until the interface asks to exit.
///
/// A game is started immediately unless one is already active.
pub fn game_loop<I: GameInterface + ?Sized>(session: &mut GameSession, interface: &mut I) {
    if !session.is_active() {
        start_new_game(session, interface);
    }

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => start_new_game(session, interface),
            UserAction::Search(query) => {
                let names = session.suggest_names(&query);
                interface.display_suggestions(&query, &names);
            }
            UserAction::GiveUp => match session.give_up() {
                Ok(result) => interface.display_give_up(&result),
                Err(e) => interface.display_error(&e),
            },
            UserAction::Guess(name) => match session.submit_guess(&name) {
                Ok(result) => interface.display_guess(&result),
                Err(e) => interface.display_error(&e),
            },
        }
    }
}

fn start_new_game<I: GameInterface + ?Sized>(session: &mut GameSession, interface: &mut I) {
    match session.start_game() {
        Ok(start) => interface.display_start(&start),
        Err(e) => interface.display_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> Arc<Learnsets> {
        Arc::new(
            Learnsets::from_entries([
                ("Pika", vec!["Thunder", "Quick Attack"]),
                ("Bulb", vec!["Vine Whip", "Quick Attack"]),
                ("Char", vec!["Ember"]),
            ])
            .unwrap(),
        )
    }

    /// 700 Pokémon share Tackle; a handful know only Splash.
    fn large_store() -> Arc<Learnsets> {
        let mut entries: Vec<(String, Vec<String>)> = (0..700)
            .map(|i| {
                (
                    format!("Mon{i:03}"),
                    vec!["Tackle".to_string(), format!("Signature{i:03}")],
                )
            })
            .collect();
        for i in 0..5 {
            entries.push((format!("Karp{i}"), vec!["Splash".to_string()]));
        }
        Arc::new(Learnsets::from_entries(entries).unwrap())
    }

    fn seeded(learnsets: Arc<Learnsets>, seed: u64) -> GameSession {
        GameSession::new(
            learnsets,
            GameConfig {
                seed: Some(seed),
                ..GameConfig::default()
            },
        )
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_pool_size, 600);
        assert_eq!(config.max_start_attempts, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_forced_start_scenario() {
        let mut session = seeded(sample_store(), 1);
        let start = session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        assert_eq!(start.revealed_move, "Quick Attack");
        assert_eq!(start.candidate_count, 2);
        assert_eq!(start.candidates, vec!["Bulb", "Pika"]);
        assert_eq!(session.clues(), ["Quick Attack".to_string()]);
    }

    #[test]
    fn test_forced_start_rejects_bad_setup() {
        let mut session = seeded(sample_store(), 1);
        assert_eq!(
            session.start_game_with("Mew", None),
            Err(GameError::UnknownName("Mew".to_string()))
        );
        assert!(matches!(
            session.start_game_with("Char", Some("Thunder")),
            Err(GameError::MoveNotLearnable { .. })
        ));
        assert!(!session.is_active());
    }

    #[test]
    fn test_forced_start_picks_reducing_first_move() {
        let mut session = seeded(sample_store(), 1);
        let start = session.start_game_with("Pika", None).unwrap();
        assert_eq!(start.revealed_move, "Thunder");
        assert_eq!(start.candidates, vec!["Pika"]);
    }

    #[test]
    fn test_guess_that_fits_clues() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let result = session.submit_guess("Bulb").unwrap();
        assert!(result.guess_passes);
        assert!(result.missing_moves.is_empty());
        assert!(!result.is_correct_identity);
        assert_eq!(result.revealed_move, "Thunder");
        assert!(result.new_clue);
        assert_eq!(result.candidates, vec!["Pika"]);
    }

    #[test]
    fn test_guess_missing_a_clue() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let result = session.submit_guess("Char").unwrap();
        assert!(!result.guess_passes);
        assert_eq!(result.missing_moves, vec!["Quick Attack"]);
    }

    #[test]
    fn test_correct_identity() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let result = session.submit_guess("Pika").unwrap();
        assert!(result.is_correct_identity);
        assert!(result.guess_passes);
    }

    #[test]
    fn test_unknown_guess_does_not_mutate() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let before = session.clues().to_vec();
        assert_eq!(
            session.submit_guess("Nonexistent"),
            Err(GameError::UnknownName("Nonexistent".to_string()))
        );
        assert_eq!(session.clues(), before.as_slice());
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn test_guess_without_game() {
        let mut session = seeded(sample_store(), 1);
        assert_eq!(session.submit_guess("Pika"), Err(GameError::NoActiveGame));
        assert_eq!(session.give_up(), Err(GameError::NoActiveGame));
        assert_eq!(session.candidate_count(), None);
    }

    #[test]
    fn test_exhausted_secret_freezes_clues() {
        let mut session = seeded(sample_store(), 1);
        session.start_game_with("Char", Some("Ember")).unwrap();

        let first = session.submit_guess("Pika").unwrap();
        assert!(!first.new_clue);
        assert!(first.exhausted);
        assert_eq!(first.revealed_move, "Ember");

        let second = session.submit_guess("Bulb").unwrap();
        assert!(second.exhausted);
        assert_eq!(second.candidates, first.candidates);
        assert_eq!(session.clues(), ["Ember".to_string()]);
    }

    #[test]
    fn test_clues_grow_until_exhausted() {
        let mut session = seeded(sample_store(), 5);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        session.submit_guess("Bulb").unwrap();
        assert_eq!(session.clues().len(), 2);
        let result = session.submit_guess("Char").unwrap();
        assert!(result.exhausted);
        assert_eq!(session.clues().len(), 2);
        assert_eq!(result.missing_moves, vec!["Quick Attack", "Thunder"]);
    }

    #[test]
    fn test_start_game_meets_minimum_pool() {
        let mut session = seeded(large_store(), 9);
        let start = session.start_game().unwrap();
        assert!(start.candidate_count >= DEFAULT_MIN_POOL_SIZE);
        assert_eq!(start.revealed_move, "Tackle");
        assert_eq!(start.candidates.len(), start.candidate_count);
        assert_eq!(session.candidate_count(), Some(start.candidate_count));
    }

    #[test]
    fn test_start_game_fails_on_small_store() {
        let mut session = seeded(sample_store(), 9);
        assert_eq!(
            session.start_game(),
            Err(GameError::NoValidStartFound {
                attempts: 1000,
                min_pool_size: 600
            })
        );
        assert!(!session.is_active());
    }

    #[test]
    fn test_start_game_with_lower_minimum() {
        let store = Learnsets::from_entries([
            ("Pika", vec!["Quick Attack", "Thunder"]),
            ("Bulb", vec!["Quick Attack", "Vine Whip"]),
            ("Char", vec!["Ember"]),
        ])
        .unwrap();
        let mut session = GameSession::new(
            Arc::new(store),
            GameConfig {
                min_pool_size: 2,
                max_start_attempts: 50,
                seed: Some(3),
            },
        );
        let start = session.start_game().unwrap();
        assert_eq!(start.revealed_move, "Quick Attack");
        assert_eq!(start.candidate_count, 2);
    }

    #[test]
    fn test_start_game_without_any_moves() {
        let store = Arc::new(Learnsets::from_entries([("Ditto", Vec::<String>::new())]).unwrap());
        let mut session = seeded(store, 1);
        assert_eq!(
            session.start_game(),
            Err(GameError::NoValidStartFound {
                attempts: 0,
                min_pool_size: 600
            })
        );
    }

    #[test]
    fn test_seeded_sessions_replay() {
        let play = || {
            let mut session = seeded(large_store(), 77);
            let start = session.start_game().unwrap();
            let guess = session.submit_guess("Mon001").unwrap();
            (start, guess)
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_give_up_reveals_and_ends_game() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let result = session.give_up().unwrap();
        assert_eq!(result.secret, "Pika");
        assert_eq!(result.clues, vec!["Quick Attack"]);
        assert_eq!(result.candidate_count, 2);
        assert!(!session.is_active());
    }

    #[test]
    fn test_suggestions_skip_previous_guesses() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        assert_eq!(session.suggest_names("b"), vec!["Bulb"]);
        session.submit_guess("Bulb").unwrap();
        assert!(session.suggest_names("b").is_empty());
    }

    #[test]
    fn test_new_game_resets_state() {
        let mut session = seeded(sample_store(), 1);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        session.submit_guess("Bulb").unwrap();
        session.start_game_with("Char", Some("Ember")).unwrap();
        assert_eq!(session.clues(), ["Ember".to_string()]);
        assert!(session.guesses().is_empty());
    }

    #[test]
    fn test_results_serialize() {
        let mut session = seeded(sample_store(), 1);
        let start = session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let json = serde_json::to_value(&start).unwrap();
        assert_eq!(json["revealed_move"], "Quick Attack");
        assert_eq!(json["candidate_count"], 2);
    }

    /// Records what the loop shows and replays a fixed list of actions.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: Vec<Option<UserAction>>,
        starts: Vec<StartResult>,
        guesses: Vec<GuessResult>,
        suggestions: Vec<Vec<String>>,
        give_ups: Vec<GiveUpResult>,
        errors: Vec<GameError>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(mut actions: Vec<Option<UserAction>>) -> Self {
            actions.reverse();
            Self {
                actions,
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop().unwrap_or(Some(UserAction::Exit))
        }

        fn display_start(&mut self, start: &StartResult) {
            self.starts.push(start.clone());
        }

        fn display_guess(&mut self, result: &GuessResult) {
            self.guesses.push(result.clone());
        }

        fn display_suggestions(&mut self, _query: &str, names: &[String]) {
            self.suggestions.push(names.to_vec());
        }

        fn display_give_up(&mut self, result: &GiveUpResult) {
            self.give_ups.push(result.clone());
        }

        fn display_error(&mut self, error: &GameError) {
            self.errors.push(error.clone());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut session = seeded(large_store(), 4);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut session, &mut interface);
        assert_eq!(interface.starts.len(), 1);
        assert!(interface.exited);
    }

    #[test]
    fn test_game_loop_keeps_forced_game() {
        let mut session = seeded(sample_store(), 4);
        session
            .start_game_with("Pika", Some("Quick Attack"))
            .unwrap();
        let mut interface = ScriptedInterface::new(vec![
            None,
            Some(UserAction::Search("u".to_string())),
            Some(UserAction::Guess("Bulb".to_string())),
            Some(UserAction::Guess("Missingno".to_string())),
            Some(UserAction::GiveUp),
            Some(UserAction::Guess("Pika".to_string())),
        ]);
        game_loop(&mut session, &mut interface);

        assert!(interface.starts.is_empty());
        assert_eq!(interface.suggestions, vec![vec!["Bulb".to_string()]]);
        assert_eq!(interface.guesses.len(), 1);
        assert_eq!(interface.give_ups[0].secret, "Pika");
        assert_eq!(
            interface.errors,
            vec![
                GameError::UnknownName("Missingno".to_string()),
                GameError::NoActiveGame
            ]
        );
        assert!(interface.exited);
    }

    #[test]
    fn test_game_loop_reports_failed_start() {
        let mut session = seeded(sample_store(), 4);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::NewGame)]);
        game_loop(&mut session, &mut interface);
        assert_eq!(interface.errors.len(), 2);
        assert!(
            interface
                .errors
                .iter()
                .all(|e| matches!(e, GameError::NoValidStartFound { .. }))
        );
    }

    #[test]
    fn test_failed_start_discards_previous_game() {
        let mut session = seeded(sample_store(), 4);
        session.start_game_with("Pika", Some("Quick Attack")).unwrap();

        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::NewGame),
            Some(UserAction::Guess("Bulb".to_string())),
        ]);
        game_loop(&mut session, &mut interface);

        assert!(!session.is_active());
        assert!(session.clues().is_empty());
        assert!(interface.guesses.is_empty());
        assert_eq!(interface.errors.len(), 2);
        assert!(matches!(
            interface.errors[0],
            GameError::NoValidStartFound { .. }
        ));
        assert_eq!(interface.errors[1], GameError::NoActiveGame);
    }
}
