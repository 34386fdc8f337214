use crate::APP_NAME;
use crate::error::LoadError;
use crate::info_log;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "pokemon_moves.json";

/// On-disk shape: `{ "Pikachu": ["Thunder Shock", ...], ... }`.
#[derive(Deserialize)]
#[serde(transparent)]
struct LearnsetFile(BTreeMap<String, Vec<String>>);

/// The moves one Pokémon can learn.
///
/// `moves` keeps the order of the source data with duplicates removed; that
/// order drives first-fit move selection.
#[derive(Debug, Clone)]
pub struct Learnset {
    moves: Vec<String>,
    lookup: HashSet<String>,
}

impl Learnset {
    fn new(raw: Vec<String>) -> Self {
        let mut lookup = HashSet::with_capacity(raw.len());
        let moves = raw
            .into_iter()
            .filter(|m| lookup.insert(m.clone()))
            .collect();
        Self { moves, lookup }
    }

    #[must_use]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    #[must_use]
    pub fn learns(&self, move_name: &str) -> bool {
        self.lookup.contains(move_name)
    }

    /// True when every move in `clues` is learnable.
    pub fn learns_all<S: AsRef<str>>(&self, clues: &[S]) -> bool {
        clues.iter().all(|m| self.learns(m.as_ref()))
    }
}

/// Immutable name -> learnset store, ordered by name.
#[derive(Debug, Clone)]
pub struct Learnsets {
    entries: BTreeMap<String, Learnset>,
}

impl Learnsets {
    /// Build a store from `(name, moves)` pairs. Later duplicates of a name
    /// replace earlier ones.
    pub fn from_entries<I, N, M>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (N, Vec<M>)>,
        N: Into<String>,
        M: Into<String>,
    {
        let entries: BTreeMap<String, Learnset> = entries
            .into_iter()
            .map(|(name, moves)| {
                let moves = moves.into_iter().map(Into::into).collect();
                (name.into(), Learnset::new(moves))
            })
            .collect();
        if entries.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Learnset> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn moves(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Learnset::moves)
    }

    #[must_use]
    pub fn learns(&self, name: &str, move_name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|learnset| learnset.learns(move_name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Learnset)> {
        self.entries.iter().map(|(name, learnset)| (name.as_str(), learnset))
    }
}

pub fn load_learnsets_from_str(data: &str) -> Result<Learnsets, LoadError> {
    let LearnsetFile(raw) = serde_json::from_str(data)?;
    let learnsets = Learnsets::from_entries(raw)?;
    info_log!("Loaded learnsets for {} Pokémon", learnsets.len());
    Ok(learnsets)
}

pub fn load_learnsets_from_file<P: AsRef<Path>>(path: P) -> Result<Learnsets, LoadError> {
    let data = fs::read_to_string(path)?;
    load_learnsets_from_str(&data)
}

/// Where to look for the data file when no path is given: the working
/// directory first, then the user data directory.
#[must_use]
pub fn default_data_path() -> Option<PathBuf> {
    let local = PathBuf::from(DATA_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    dirs::data_dir().map(|dir| dir.join(APP_NAME).join(DATA_FILE_NAME))
}
