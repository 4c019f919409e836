//! Visible page-number window for the blog pager.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_VISIBLE: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EllipsisSide {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(u32),
    Ellipsis(EllipsisSide),
}

/// Pages to render for `current` of `total`, showing at most roughly
/// `max_visible` numbers. First and last page are always present; gaps are
/// marked with an ellipsis on the side where they occur.
///
/// Returns an empty list when there is nothing to page through.
#[must_use]
pub fn visible_pages(current: u32, total: u32, max_visible: u32) -> Vec<PageItem> {
    if total <= 1 {
        return Vec::new();
    }
    if total <= max_visible {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let side = max_visible.saturating_sub(3) / 2;
    let left = current.saturating_sub(side).max(2);
    let right = current.saturating_add(side).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if left > 2 {
        items.push(PageItem::Ellipsis(EllipsisSide::Start));
    }
    items.extend((left..=right).map(PageItem::Page));
    if right < total - 1 {
        items.push(PageItem::Ellipsis(EllipsisSide::End));
    }
    items.push(PageItem::Page(total));
    items
}

#[must_use]
pub fn has_prev(current: u32) -> bool {
    current > 1
}

#[must_use]
pub fn has_next(current: u32, total: u32) -> bool {
    current < total
}
