//! Pagination
//!
//! Page math shared by the list controller and the pagination bar.

use std::ops::RangeInclusive;

use crate::route_guard::CATALOGUE_PATH;

/// Items requested per page
pub const PAGE_SIZE: u32 = 20;

/// `max(1, ceil(total_count / page_size))`
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Offset of the first item on `page` (1-based)
pub fn offset_for(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Read the `page` query value. Missing, non-numeric or zero falls back to 1.
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// URL of the catalogue view showing `page`
pub fn page_query(page: u32) -> String {
    format!("{}?page={}", CATALOGUE_PATH, page)
}

/// Numbered buttons to offer around `current`: at most `width` pages,
/// centred where possible and clamped to `[1, total]`.
pub fn page_window(current: u32, total: u32, width: u32) -> RangeInclusive<u32> {
    let total = total.max(1);
    let width = width.clamp(1, total);
    let current = current.clamp(1, total);

    let start = current.saturating_sub(width / 2).max(1);
    let end = start.saturating_add(width - 1).min(total);
    let start = end.saturating_sub(width - 1).max(1);
    start..=end
}

/// A navigation request from the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Previous,
    Number(u32),
    Next,
    Last,
}

impl PageRequest {
    /// Target page, or `None` when it falls outside `[1, total_pages]`.
    pub fn resolve(self, current: u32, total_pages: u32) -> Option<u32> {
        let target = match self {
            PageRequest::First => 1,
            PageRequest::Previous => current.checked_sub(1)?,
            PageRequest::Number(page) => page,
            PageRequest::Next => current.checked_add(1)?,
            PageRequest::Last => total_pages,
        };
        (1..=total_pages).contains(&target).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(1000, 20), 50);
        assert_eq!(total_pages(1001, 20), 51);
        assert_eq!(total_pages(19, 20), 1);
        assert_eq!(total_pages(0, 20), 1);
    }

    #[test]
    fn test_offset_for() {
        assert_eq!(offset_for(1, 20), 0);
        assert_eq!(offset_for(2, 20), 20);
        assert_eq!(offset_for(50, 20), 980);
    }

    #[test]
    fn test_parse_page_param() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("-2")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
    }

    #[test]
    fn test_page_query() {
        assert_eq!(page_query(7), "/?page=7");
    }

    #[test]
    fn test_resolve_in_range() {
        assert_eq!(PageRequest::First.resolve(5, 50), Some(1));
        assert_eq!(PageRequest::Previous.resolve(5, 50), Some(4));
        assert_eq!(PageRequest::Next.resolve(5, 50), Some(6));
        assert_eq!(PageRequest::Last.resolve(5, 50), Some(50));
        assert_eq!(PageRequest::Number(12).resolve(5, 50), Some(12));
    }

    #[test]
    fn test_resolve_out_of_range() {
        assert_eq!(PageRequest::Previous.resolve(1, 50), None);
        assert_eq!(PageRequest::Next.resolve(50, 50), None);
        assert_eq!(PageRequest::Number(0).resolve(5, 50), None);
        assert_eq!(PageRequest::Number(51).resolve(5, 50), None);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 50, 5), 1..=5);
        assert_eq!(page_window(10, 50, 5), 8..=12);
        assert_eq!(page_window(50, 50, 5), 46..=50);
        assert_eq!(page_window(2, 3, 5), 1..=3);
        assert_eq!(page_window(1, 1, 5), 1..=1);
    }
}
