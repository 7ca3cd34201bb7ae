//! # Search
//!
//! - [`filter`] - the pure predicate and sort over the catalog
//! - [`history`] and [`analytics`] - what gets remembered about executed searches
//! - [`suggestions`] - what the search box offers before typing
//! - [`command`] - free-text commands ("find suya", "sort by rating")
//! - [`service`] - the debounced search task and its client

pub mod analytics;
pub mod command;
pub mod filter;
pub mod history;
pub mod service;
pub mod suggestions;

pub use analytics::{PopularSearch, SearchAnalytics, SearchRecord, SearchStats};
pub use command::{parse_command, ClearScope, FilterPatch, SearchCommand};
pub use filter::{matches_query, search, CategoryFilter, PriceRange, SearchFilters, SortKey};
pub use history::SearchHistory;
pub use service::{SearchClient, SearchError, SearchOutcome, SearchService, SearchSettings};
pub use suggestions::suggestions;
