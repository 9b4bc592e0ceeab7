//! Fixed-size pagination over an ordered collection.
//!
//! Pages are 1-based. Asking for a page past the end yields an empty slice
//! rather than an error, so callers can page freely without bounds checks.

/// Number of tasks shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Returns the items in `[(page - 1) * page_size, page * page_size)`.
///
/// The range is clamped to `items`; page `0` and a zero page size both
/// produce an empty slice.
pub fn page_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// Number of pages needed to show `len` items; an empty list still has one page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}
