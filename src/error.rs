//! Error types for loading learnset data and running games.

use thiserror::Error;

/// Errors raised while loading the learnset data file.
///
/// All of these are fatal: the game cannot run without a store.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read learnset data: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse learnset data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("learnset data contains no Pokémon")]
    Empty,
}

/// Errors returned by game session operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No secret produced an opening pool large enough within the attempt cap.
    #[error("no valid start found after {attempts} attempts (minimum pool size {min_pool_size})")]
    NoValidStartFound { attempts: usize, min_pool_size: usize },

    /// A guess or give-up was submitted before a game was started.
    #[error("no active game, start a new game first")]
    NoActiveGame,

    /// The name is not a key in the learnset store.
    #[error("unknown Pokémon: {0}")]
    UnknownName(String),

    /// A forced setup named a first move the secret cannot learn.
    #[error("{name} cannot learn {move_name}")]
    MoveNotLearnable { name: String, move_name: String },
}

pub type GameResult<T> = Result<T, GameError>;
