//! Search analytics: a bounded log of executed searches and the aggregates read from it.

use super::filter::{CategoryFilter, PriceRange, SearchFilters};
use crate::model::DietaryFlag;
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Filters as recorded with a search. Sorting is not part of the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedFilters {
    pub price_range: PriceRange,
    pub category: CategoryFilter,
    pub dietary: Vec<DietaryFlag>,
}

impl From<&SearchFilters> for RecordedFilters {
    fn from(f: &SearchFilters) -> Self {
        Self {
            price_range: f.price_range,
            category: f.category.clone(),
            dietary: f.dietary.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub query: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub filters: RecordedFilters,
    pub results_count: usize,
}

impl SearchRecord {
    pub fn now(query: &str, filters: &SearchFilters, results_count: usize) -> Self {
        Self {
            query: query.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            filters: filters.into(),
            results_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularSearch {
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryCount {
    pub diet: DietaryFlag,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_searches: usize,
    /// 0 when nothing has been searched.
    pub average_results_count: f64,
    pub popular_categories: Vec<CategoryCount>,
    pub popular_dietary: Vec<DietaryCount>,
}

/// Counts in first-seen order, then sorted by count descending (stable, so ties keep
/// first-seen order).
fn ranked<K: Hash + Eq>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Bounded analytics log, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchAnalytics {
    records: Vec<SearchRecord>,
    capacity: usize,
}

impl SearchAnalytics {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn with_records(mut self, mut records: Vec<SearchRecord>) -> Self {
        records.truncate(self.capacity);
        self.records = records;
        self
    }

    pub fn track(&mut self, record: SearchRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn popular_searches(&self, limit: usize) -> Vec<PopularSearch> {
        ranked(self.records.iter().map(|r| r.query.as_str()))
            .into_iter()
            .take(limit)
            .map(|(query, count)| PopularSearch {
                query: query.to_string(),
                count,
            })
            .collect()
    }

    pub fn stats(&self) -> SearchStats {
        let total_searches = self.records.len();
        let average_results_count = if total_searches == 0 {
            0.0
        } else {
            let sum: usize = self.records.iter().map(|r| r.results_count).sum();
            sum as f64 / total_searches as f64
        };
        let popular_categories = ranked(self.records.iter().map(|r| r.filters.category.to_string()))
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        let popular_dietary = ranked(self.records.iter().flat_map(|r| r.filters.dietary.iter().copied()))
            .into_iter()
            .map(|(diet, count)| DietaryCount { diet, count })
            .collect();
        SearchStats {
            total_searches,
            average_results_count,
            popular_categories,
            popular_dietary,
        }
    }
}
