use crate::constants::MAX_PAGES_WITHOUT_ELLIPSIS;
use crate::error::{DashError, Result};
use crate::types::{PageItem, PagePosition};
use PageItem::{Ellipsis, Page};

/// Generate the page numbers shown by the pagination control.
///
/// Short ranges list every page. Longer ranges keep the first and last pages
/// visible and collapse the rest around the current page into ellipses.
pub fn generate_pagination(current_page: u32, total_pages: u32) -> Result<Vec<PageItem>> {
    if total_pages == 0 || current_page == 0 || current_page > total_pages {
        return Err(DashError::InvalidPageRange {
            current_page,
            total_pages,
        });
    }

    // Few enough pages to show them all
    if total_pages <= MAX_PAGES_WITHOUT_ELLIPSIS {
        return Ok((1..=total_pages).map(Page).collect());
    }

    // Near the start
    if current_page <= 3 {
        return Ok(vec![
            Page(1),
            Page(2),
            Page(3),
            Ellipsis,
            Page(total_pages - 1),
            Page(total_pages),
        ]);
    }

    // Near the end
    if current_page >= total_pages - 2 {
        return Ok(vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]);
    }

    Ok(vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ])
}

/// Position of the item at `index` within the control
pub fn page_position(items: &[PageItem], index: usize) -> PagePosition {
    if items.get(index).is_some_and(PageItem::is_ellipsis) {
        return PagePosition::Middle;
    }

    match (index, items.len()) {
        (0, 1) => PagePosition::Single,
        (0, _) => PagePosition::First,
        (i, len) if i + 1 == len => PagePosition::Last,
        _ => PagePosition::Middle,
    }
}

#[inline]
pub fn has_previous_page(current_page: u32) -> bool {
    current_page > 1
}

#[inline]
pub fn has_next_page(current_page: u32, total_pages: u32) -> bool {
    current_page < total_pages
}
