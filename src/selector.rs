use crate::debug_log;
use crate::learnset::Learnsets;
use crate::pool::compute_pool;
use rand::Rng;
use rand::seq::SliceRandom;

/// Outcome of picking the next move to reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveChoice {
    /// First move, in load order, that strictly shrinks the pool.
    Reducing(String),
    /// No unused move shrinks the pool; picked uniformly at random.
    Fallback(String),
    /// Every move of the secret has already been revealed.
    Exhausted,
}

impl MoveChoice {
    #[must_use]
    pub fn move_name(&self) -> Option<&str> {
        match self {
            Self::Reducing(m) | Self::Fallback(m) => Some(m),
            Self::Exhausted => None,
        }
    }

    #[must_use]
    pub fn into_move(self) -> Option<String> {
        match self {
            Self::Reducing(m) | Self::Fallback(m) => Some(m),
            Self::Exhausted => None,
        }
    }
}

/// Pick the next clue for a secret whose moves are `secret_moves`.
///
/// Moves already in `clues` are skipped. The scan is first-fit over the
/// secret's move order, so among several reducing moves the earliest wins
/// regardless of how much each one reduces.
pub fn select_next_move<R: Rng + ?Sized>(
    secret_moves: &[String],
    clues: &[String],
    learnsets: &Learnsets,
    rng: &mut R,
) -> MoveChoice {
    let unused: Vec<&String> = secret_moves
        .iter()
        .filter(|m| !clues.contains(m))
        .collect();
    if unused.is_empty() {
        debug_log!("select_next_move() - all {} moves revealed", secret_moves.len());
        return MoveChoice::Exhausted;
    }

    let pool = compute_pool(clues, learnsets);
    if let Some(found) = first_reducing_move(&unused, &pool, learnsets) {
        return MoveChoice::Reducing(found.clone());
    }

    debug_log!(
        "select_next_move() - no reducing move among {} unused, pool stays at {}",
        unused.len(),
        pool.len()
    );
    match unused.choose(rng) {
        Some(m) => MoveChoice::Fallback((*m).clone()),
        None => MoveChoice::Exhausted,
    }
}

// Adding a move shrinks the pool exactly when some current member can't learn it.
fn first_reducing_move<'m>(
    candidates: &[&'m String],
    pool: &[&str],
    learnsets: &Learnsets,
) -> Option<&'m String> {
    candidates
        .iter()
        .copied()
        .find(|m| pool.iter().any(|name| !learnsets.learns(name, m)))
}
