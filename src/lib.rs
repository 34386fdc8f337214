// Library interface for movedle
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod learnset;
pub mod logging;
pub mod pool;
pub mod selector;
pub mod tui;

pub const APP_NAME: &str = "movedle";

// Re-export commonly used items for easier testing
pub use error::{GameError, GameResult, LoadError};
pub use game_state::{
    GameConfig, GameInterface, GameSession, GiveUpResult, GuessResult, StartResult, UserAction,
    game_loop,
};
pub use learnset::{Learnsets, load_learnsets_from_file, load_learnsets_from_str};
pub use pool::{compute_pool, pool_size, search_names};
pub use selector::{MoveChoice, select_next_move};
