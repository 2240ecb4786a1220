//! FILENAME: grid-engine/src/pagination.rs
//! Pagination Controller - bounds arithmetic for the page cursor.
//!
//! Translates page-index/page-size changes into validated cursor
//! updates. The invariant maintained here:
//! `0 <= page_index < page_count(filtered, size)` after every
//! operation. Out-of-range navigation is rejected with the prior
//! cursor kept; a shrunken result set is clamped, never left dangling.

use crate::error::GridError;
use crate::state::Pagination;

/// Number of pages for a filtered row count.
///
/// An empty result still has one (empty) page, so the page-index
/// invariant stays satisfiable. `page_size` is validated at every
/// setter; the `max(1)` guard only keeps this function total.
pub fn page_count(total_filtered: usize, page_size: u32) -> usize {
    let size = page_size.max(1) as usize;
    (total_filtered.div_ceil(size)).max(1)
}

impl Pagination {
    /// Source index of the first row on the current page.
    pub fn first_row_index(&self) -> usize {
        self.page_index * self.page_size as usize
    }

    /// Navigates to an absolute page, rejecting indexes outside
    /// `[0, page_count)`. The cursor is untouched on rejection.
    pub fn go_to_page(&mut self, page: usize, total_filtered: usize) -> Result<(), GridError> {
        let count = page_count(total_filtered, self.page_size);
        if page >= count {
            return Err(GridError::OutOfRangeNavigation {
                requested: page,
                page_count: count,
            });
        }
        self.page_index = page;
        Ok(())
    }

    /// Changes the page size, preserving the first visible row: the
    /// new page index is the page that contains the row previously at
    /// the top, not a reset to 0. Losing the user's position on a
    /// resize is a usability defect.
    pub fn set_page_size(&mut self, size: u32, total_filtered: usize) -> Result<(), GridError> {
        if size == 0 {
            return Err(GridError::InvalidConfiguration(
                "page size must be positive".to_string(),
            ));
        }
        let first_row = self.first_row_index();
        self.page_size = size;
        self.page_index = first_row / size as usize;
        self.clamp_page_index(total_filtered);
        Ok(())
    }

    /// Pulls a dangling page index back into range after the filtered
    /// count shrank underneath it.
    pub fn clamp_page_index(&mut self, total_filtered: usize) {
        let count = page_count(total_filtered, self.page_size);
        if self.page_index >= count {
            self.page_index = count - 1;
        }
    }
}
