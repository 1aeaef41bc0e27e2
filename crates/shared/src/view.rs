//! Filter and pagination over the in-memory user list.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::UserRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::TwentyFive, Self::Fifty, Self::Hundred];

    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported page size '{0}'; expected one of 10, 25, 50, 100")]
pub struct UnsupportedPageSize(pub String);

impl TryFrom<usize> for PageSize {
    type Error = UnsupportedPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| UnsupportedPageSize(value.to_string()))
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl std::str::FromStr for PageSize {
    type Err = UnsupportedPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<usize>()
            .map_err(|_| UnsupportedPageSize(s.to_string()))?;
        Self::try_from(value)
    }
}

/// Case-insensitive substring match on name or email.
pub fn matches_filter(record: &UserRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    record.name.to_lowercase().contains(&query) || record.email.to_lowercase().contains(&query)
}

/// Always filters the full list, never a previous result.
pub fn apply_filter(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|record| matches_filter(record, query))
        .cloned()
        .collect()
}

pub fn total_pages(len: usize, per_page: PageSize) -> usize {
    len.div_ceil(per_page.get())
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Rows of the 1-based `page`; empty when the page lies past the end.
pub fn paginate(filtered: &[UserRecord], page: usize, per_page: PageSize) -> &[UserRecord] {
    let per_page = per_page.get();
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(filtered.len());
    &filtered[start..end]
}
