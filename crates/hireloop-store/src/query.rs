// SPDX-FileCopyrightText: 2026 Hireloop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filtering and pagination primitives shared by the entity stores.

use serde::Serialize;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// First page of `size` rows. A zero size is treated as one.
    pub fn new(size: u32) -> Self {
        Self {
            page: 1,
            size: size.max(1),
        }
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.size.max(1) as usize
    }

    /// Number of pages needed for `total` rows. Zero rows is zero pages.
    pub fn total_pages(&self, total: usize) -> u32 {
        total.div_ceil(self.size.max(1) as usize) as u32
    }
}

/// Rows `[(page-1)*size, page*size)` of `items`, empty past the end.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> Vec<T> {
    let start = pagination.offset();
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + pagination.size.max(1) as usize).min(items.len());
    items[start..end].to_vec()
}

/// Case-insensitive substring match against any of `fields`.
///
/// An empty or whitespace-only needle matches everything.
pub fn matches_search(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Merges one filter set into another, field by field.
///
/// Fields set on `update` replace the current value; unset fields keep it.
pub trait Merge {
    fn merge(&mut self, update: Self);
}

/// Overwrites `slot` only when `update` carries a value.
pub(crate) fn merge_field<T>(slot: &mut Option<T>, update: Option<T>) {
    if update.is_some() {
        *slot = update;
    }
}

/// Treats empty strings as "no filter".
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_is_rows_ten_to_twenty() {
        let rows: Vec<u32> = (0..25).collect();
        let page = Pagination { page: 2, size: 10 };
        assert_eq!(paginate(&rows, page), (10..20).collect::<Vec<_>>());
        let last = Pagination { page: 3, size: 10 };
        assert_eq!(paginate(&rows, last), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let rows: Vec<u32> = (0..20).collect();
        assert!(paginate(&rows, Pagination { page: 3, size: 10 }).is_empty());
        assert!(paginate::<u32>(&[], Pagination::default()).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
    }

    #[test]
    fn search_is_case_insensitive() {
        assert!(matches_search("DEV", &["Frontend Developer", ""]));
        assert!(matches_search("  ", &["anything"]));
        assert!(!matches_search("rust", &["Go", "Python"]));
    }

    #[test]
    fn merge_field_keeps_existing_when_unset() {
        let mut slot = Some("Engineering".to_string());
        merge_field(&mut slot, None);
        assert_eq!(slot.as_deref(), Some("Engineering"));
        merge_field(&mut slot, Some("Design".to_string()));
        assert_eq!(slot.as_deref(), Some("Design"));
    }
}
