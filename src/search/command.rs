//! Free-text search commands, as spoken into the search box.
//!
//! The phrasing is deliberately loose: anything that is not recognised as a filter,
//! sort or clear request is searched for verbatim.

use super::filter::{CategoryFilter, PriceRange, SearchFilters, SortKey};
use crate::model::DietaryFlag;

/// Categories a command can name, in the order they are checked.
const COMMAND_CATEGORIES: [&str; 6] = [
    "Main Dishes",
    "Soups",
    "Quick Bites",
    "Appetizers",
    "Grills",
    "Sides",
];

/// A partial change to [`SearchFilters`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub price_range: Option<PriceRange>,
    pub category: Option<CategoryFilter>,
    pub dietary: Option<Vec<DietaryFlag>>,
}

impl FilterPatch {
    pub fn apply(&self, filters: &mut SearchFilters) {
        if let Some(range) = self.price_range {
            filters.price_range = range;
        }
        if let Some(category) = &self.category {
            filters.category = category.clone();
        }
        if let Some(dietary) = &self.dietary {
            filters.dietary = dietary.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    /// Query and filters.
    All,
    Filters,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchCommand {
    Search(String),
    Filter(FilterPatch),
    Sort(SortKey),
    Clear(ClearScope),
}

impl SearchCommand {
    /// Applies the command to the search box state.
    pub fn apply(&self, query: &mut String, filters: &mut SearchFilters) {
        match self {
            SearchCommand::Search(term) => *query = term.clone(),
            SearchCommand::Filter(patch) => patch.apply(filters),
            SearchCommand::Sort(key) => filters.sort_by = *key,
            SearchCommand::Clear(ClearScope::All) => {
                query.clear();
                *filters = SearchFilters::default();
            }
            SearchCommand::Clear(ClearScope::Filters) => *filters = SearchFilters::default(),
        }
    }
}

fn search_term(text: &str) -> Option<String> {
    ["search for", "find"].iter().find_map(|prefix| {
        let rest = text.strip_prefix(prefix)?;
        // The prefix must be followed by whitespace; "finder" is a search for "finder".
        match rest.strip_prefix(char::is_whitespace) {
            Some(term) => Some(term.trim_start().to_string()),
            None => Some(text.to_string()),
        }
    })
}

fn price_range(text: &str) -> Option<PriceRange> {
    if !text.contains("price") {
        return None;
    }
    if text.contains("under 10") || text.contains("less than 10") {
        Some(PriceRange::Under10)
    } else if text.contains("between 10 and 20") || text.contains("10 to 20") {
        Some(PriceRange::From10To20)
    } else if text.contains("over 20") || text.contains("more than 20") {
        Some(PriceRange::Over20)
    } else {
        None
    }
}

fn sort_key(text: &str) -> Option<SortKey> {
    if !text.contains("sort") {
        return None;
    }
    if text.contains("price low") || text.contains("lowest price") {
        Some(SortKey::PriceAsc)
    } else if text.contains("price high") || text.contains("highest price") {
        Some(SortKey::PriceDesc)
    } else if text.contains("rating") || text.contains("best rated") {
        Some(SortKey::RatingDesc)
    } else {
        None
    }
}

fn clear_scope(text: &str) -> Option<ClearScope> {
    if !text.contains("clear") {
        return None;
    }
    if text.contains("all") || text.contains("everything") {
        Some(ClearScope::All)
    } else if text.contains("filter") {
        Some(ClearScope::Filters)
    } else {
        None
    }
}

/// Parses a transcript. Matching is case-insensitive.
pub fn parse_command(transcript: &str) -> SearchCommand {
    let text = transcript.trim().to_lowercase();

    if let Some(term) = search_term(&text) {
        return SearchCommand::Search(term);
    }
    if let Some(range) = price_range(&text) {
        return SearchCommand::Filter(FilterPatch {
            price_range: Some(range),
            ..Default::default()
        });
    }
    if let Some(category) = COMMAND_CATEGORIES
        .iter()
        .find(|c| text.contains(&c.to_lowercase()))
    {
        return SearchCommand::Filter(FilterPatch {
            category: Some(CategoryFilter::Named(category.to_string())),
            ..Default::default()
        });
    }
    if let Some(flag) = DietaryFlag::ALL
        .iter()
        .find(|f| text.contains(&f.label().to_lowercase()))
    {
        return SearchCommand::Filter(FilterPatch {
            dietary: Some(vec![*flag]),
            ..Default::default()
        });
    }
    if let Some(key) = sort_key(&text) {
        return SearchCommand::Sort(key);
    }
    if let Some(scope) = clear_scope(&text) {
        return SearchCommand::Clear(scope);
    }
    SearchCommand::Search(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_phrases() {
        assert_eq!(
            parse_command("Search for Jollof Rice"),
            SearchCommand::Search("jollof rice".into())
        );
        assert_eq!(parse_command("find  suya"), SearchCommand::Search("suya".into()));
        assert_eq!(parse_command("finder"), SearchCommand::Search("finder".into()));
        assert_eq!(parse_command("egusi"), SearchCommand::Search("egusi".into()));
    }

    #[test]
    fn filter_phrases() {
        let cmd = parse_command("show price under 10");
        assert_eq!(
            cmd,
            SearchCommand::Filter(FilterPatch {
                price_range: Some(PriceRange::Under10),
                ..Default::default()
            })
        );
        assert!(matches!(
            parse_command("price between 10 and 20"),
            SearchCommand::Filter(FilterPatch { price_range: Some(PriceRange::From10To20), .. })
        ));
        // Without "price" the phrase is not a price filter.
        assert_eq!(parse_command("over 20"), SearchCommand::Search("over 20".into()));

        assert!(matches!(
            parse_command("only soups please"),
            SearchCommand::Filter(FilterPatch { category: Some(CategoryFilter::Named(c)), .. }) if c == "Soups"
        ));
        assert!(matches!(
            parse_command("gluten free"),
            SearchCommand::Filter(FilterPatch { dietary: Some(d), .. }) if d == vec![DietaryFlag::GlutenFree]
        ));
    }

    #[test]
    fn sort_and_clear_phrases() {
        assert_eq!(parse_command("sort by lowest price"), SearchCommand::Sort(SortKey::PriceAsc));
        assert_eq!(parse_command("sort price high"), SearchCommand::Sort(SortKey::PriceDesc));
        assert_eq!(parse_command("sort by best rated"), SearchCommand::Sort(SortKey::RatingDesc));
        assert_eq!(parse_command("clear everything"), SearchCommand::Clear(ClearScope::All));
        assert_eq!(parse_command("clear filters"), SearchCommand::Clear(ClearScope::Filters));
    }

    #[test]
    fn apply_updates_box_state() {
        let mut query = "rice".to_string();
        let mut filters = SearchFilters::default();

        parse_command("sort by rating").apply(&mut query, &mut filters);
        parse_command("vegan").apply(&mut query, &mut filters);
        assert_eq!(filters.sort_by, SortKey::RatingDesc);
        assert_eq!(filters.dietary, vec![DietaryFlag::Vegan]);
        assert_eq!(query, "rice");

        parse_command("clear all").apply(&mut query, &mut filters);
        assert!(query.is_empty());
        assert_eq!(filters, SearchFilters::default());
    }
}
