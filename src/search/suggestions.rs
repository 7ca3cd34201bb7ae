use super::analytics::PopularSearch;
use indexmap::IndexSet;

/// How many suggestions the search box shows.
pub const SUGGESTION_LIMIT: usize = 6;

/// Popular searches first, then recent history, each query once.
pub fn suggestions(popular: &[PopularSearch], history: &[String], limit: usize) -> Vec<String> {
    let merged: IndexSet<&str> = popular
        .iter()
        .map(|p| p.query.as_str())
        .chain(history.iter().map(String::as_str))
        .collect();
    merged.into_iter().take(limit).map(str::to_string).collect()
}
