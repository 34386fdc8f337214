use crate::learnset::Learnsets;

/// Names whose learnset contains every move in `clues`, in store order.
///
/// An empty clue list matches every Pokémon.
pub fn compute_pool<'a, S: AsRef<str>>(clues: &[S], learnsets: &'a Learnsets) -> Vec<&'a str> {
    learnsets
        .iter()
        .filter(|(_, learnset)| learnset.learns_all(clues))
        .map(|(name, _)| name)
        .collect()
}

/// Size of the pool for `clues` without collecting names.
pub fn pool_size<S: AsRef<str>>(clues: &[S], learnsets: &Learnsets) -> usize {
    learnsets
        .iter()
        .filter(|(_, learnset)| learnset.learns_all(clues))
        .count()
}

/// Case-insensitive substring search over every name in the store.
///
/// A blank query yields no options.
pub fn search_names(learnsets: &Learnsets, query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    learnsets
        .names()
        .filter(|name| name.to_lowercase().contains(&query))
        .map(str::to_string)
        .collect()
}
