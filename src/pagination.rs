//! Fixed-size pagination over an ordered list
//!
//! [`page`] is the pure slicing operation. [`PaginationView`] adds the
//! tracked current page used by an interactive session.
//!
//! The view has no notion of list identity: when a new search, filter or
//! sort produces a different list the caller must [`PaginationView::reset`].

use thiserror::Error;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// Page size must be positive
    #[error("Invalid page size: must be greater than 0")]
    InvalidPageSize,
}

/// One page of an ordered list
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// Items on this page, at most `page_size`
    pub items: &'a [T],
    /// 1-based page number after clamping
    pub page_number: usize,
    /// Total number of pages, never less than 1
    pub page_count: usize,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_number < self.page_count
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// Number of pages needed for `len` items, at least 1
#[must_use]
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if len == 0 { 1 } else { len.div_ceil(page_size) }
}

/// Slice `ordered` into the requested page
///
/// `page_number` is clamped into `[1, page_count]`.
///
/// # Errors
///
/// Returns `PaginationError::InvalidPageSize` if `page_size` is zero.
pub fn page<T>(ordered: &[T], page_size: usize, page_number: usize) -> Result<Page<'_, T>, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize);
    }

    let page_count = page_count(ordered.len(), page_size);
    let page_number = page_number.clamp(1, page_count);

    let start = ((page_number - 1) * page_size).min(ordered.len());
    let end = start.saturating_add(page_size).min(ordered.len());

    Ok(Page {
        items: &ordered[start..end],
        page_number,
        page_count,
    })
}

/// Tracks the current page for a fixed page size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    page_size: usize,
    current: usize,
}

impl PaginationView {
    /// Create a view starting on page 1
    ///
    /// # Errors
    ///
    /// Returns `PaginationError::InvalidPageSize` if `page_size` is zero.
    pub const fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        Ok(Self { page_size, current: 1 })
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The tracked page number (not yet clamped against any list)
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Go back to page 1
    pub const fn reset(&mut self) {
        self.current = 1;
    }

    /// Jump to a page, clamped against a list of `len` items
    pub fn go_to(&mut self, page_number: usize, len: usize) -> usize {
        self.current = page_number.clamp(1, page_count(len, self.page_size));
        self.current
    }

    /// Advance one page if there is one
    pub fn next(&mut self, len: usize) -> usize {
        self.go_to(self.current.saturating_add(1), len)
    }

    /// Go back one page if there is one
    pub fn previous(&mut self, len: usize) -> usize {
        self.go_to(self.current.saturating_sub(1), len)
    }

    /// The current page of `ordered`
    #[must_use]
    pub fn view<'a, T>(&self, ordered: &'a [T]) -> Page<'a, T> {
        let page_count = page_count(ordered.len(), self.page_size);
        let page_number = self.current.clamp(1, page_count);
        let start = ((page_number - 1) * self.page_size).min(ordered.len());
        let end = start.saturating_add(self.page_size).min(ordered.len());

        Page {
            items: &ordered[start..end],
            page_number,
            page_count,
        }
    }
}

impl Default for PaginationView {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current: 1,
        }
    }
}
