// src/catalog.rs
//! Immutable in-memory article snapshot behind the query service.
//!
//! Ids are 1-based positions in load order and only mean something for the
//! lifetime of one snapshot.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QueryError;
use crate::model::{Article, DATE_FORMAT};
use crate::store;

pub const MIN_SEARCH_LEN: usize = 3;

/// Article as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredArticle {
    pub id: u64,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: String,
    pub publication_date: NaiveDate,
    pub category: String,
}

/// Raw query-string filters for `list`. Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn parse_filter_date(field: &'static str, raw: Option<&str>) -> Result<Option<NaiveDate>, QueryError> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| QueryError::InvalidDate {
            field,
            value: s.to_string(),
        })
    })
    .transpose()
}

#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<StoredArticle>,
}

impl ArticleCatalog {
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let articles = articles
            .into_iter()
            .zip(1u64..)
            .map(|(a, id)| StoredArticle {
                id,
                title: a.title,
                summary: a.summary,
                url: a.url,
                source: a.source,
                publication_date: a.publication_date,
                category: a.category.unwrap_or_default(),
            })
            .collect();
        Self { articles }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_articles(store::read_articles(path)?))
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Conjunctive category / date-range filter.
    pub fn list(&self, filter: &ListFilter) -> Result<Vec<&StoredArticle>, QueryError> {
        let category = present(&filter.category).map(str::to_lowercase);
        let start = parse_filter_date("start_date", present(&filter.start_date))?;
        let end = parse_filter_date("end_date", present(&filter.end_date))?;

        Ok(self
            .articles
            .iter()
            .filter(|a| {
                category
                    .as_deref()
                    .map_or(true, |c| a.category.to_lowercase() == c)
            })
            .filter(|a| start.map_or(true, |s| a.publication_date >= s))
            .filter(|a| end.map_or(true, |e| a.publication_date <= e))
            .collect())
    }

    pub fn get(&self, id: u64) -> Result<&StoredArticle, QueryError> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or(QueryError::NotFound)
    }

    /// Case-insensitive substring match over title or summary.
    pub fn search(&self, q: &str) -> Result<Vec<&StoredArticle>, QueryError> {
        if q.chars().count() < MIN_SEARCH_LEN {
            return Err(QueryError::QueryTooShort {
                min: MIN_SEARCH_LEN,
            });
        }
        let needle = q.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.summary.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
