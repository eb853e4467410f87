use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::normalize::Article;
use crate::state::{Selection, ALL_PUBLICATIONS};

/// Counts per calendar month, index 0 = January.
pub type MonthlyCounts = [u32; 12];

/// Articles grouped by publication, with publications kept in first-seen
/// (load) order. Derived state: rebuilt whenever the article collection
/// changes, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct PublicationGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<Article>>,
}

impl PublicationGroups {
    /// Build groups with a single left-to-right scan, so group membership
    /// order mirrors load order.
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut order = Vec::new();
        let mut groups: HashMap<String, Vec<Article>> = HashMap::new();

        for article in articles {
            if !groups.contains_key(&article.publication) {
                order.push(article.publication.clone());
            }
            groups
                .entry(article.publication.clone())
                .or_default()
                .push(article.clone());
        }

        Self { order, groups }
    }

    /// Distinct publication names in first-seen order.
    pub fn publications(&self) -> &[String] {
        &self.order
    }

    pub fn get(&self, publication: &str) -> Option<&[Article]> {
        self.groups.get(publication).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Article])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.groups[name].as_slice()))
    }

    /// The selector list shown to the user: "All" plus each publication.
    pub fn selector_list(&self) -> Vec<String> {
        let mut list = Vec::with_capacity(self.order.len() + 1);
        list.push(ALL_PUBLICATIONS.to_string());
        list.extend(self.order.iter().cloned());
        list
    }

    pub fn total_len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Interpret a collected_at stamp as a zero-based calendar month index.
/// Accepts RFC 3339, a naive datetime, or a bare date.
pub fn parse_collected_at(raw: &str) -> Option<usize> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.month0() as usize);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.month0() as usize);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.month0() as usize);
    }
    None
}

/// Count articles per calendar month for the given selection. An article with
/// a missing or unparseable collected_at is skipped here but still appears in
/// the publication groups; date validity and group membership are independent.
pub fn monthly_counts(articles: &[Article], selection: &Selection) -> MonthlyCounts {
    let mut counts = [0u32; 12];

    for article in articles {
        if !selection.matches(&article.publication) {
            continue;
        }
        let Some(stamp) = article.collected_at.as_deref() else {
            continue;
        };
        if let Some(month) = parse_collected_at(stamp) {
            counts[month] += 1;
        }
    }

    counts
}
