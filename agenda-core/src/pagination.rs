//! Paginated retrieval state.

use crate::event::EventPage;

/// Tracks the current page of a paginated event listing.
///
/// Holds state only: whenever a navigation method returns `true` the
/// owning view must perform exactly one refetch. Page numbers are
/// 1-based, matching the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total: i64,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Pagination {
            current_page: 1,
            page_size,
            total_pages: 1,
            total: 0,
        }
    }

    /// Adopt the range metadata reported by the latest response.
    pub fn apply_response(&mut self, page: &EventPage) {
        self.current_page = page.current_page;
        self.total_pages = page.total_pages;
        self.total = page.total;
    }

    /// Move to page `n`. No-op outside `1..=total_pages`; returns
    /// whether the caller must refetch.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages {
            return false;
        }
        self.current_page = n;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// After a delete, step back one page when the deleted row was the
    /// last one on a page that is not the first, so the user is never
    /// left viewing a page number beyond the new total.
    /// `remaining_on_page` counts the rows left on the current page.
    pub fn step_back_if_emptied(&mut self, remaining_on_page: usize) {
        if remaining_on_page == 0 && self.current_page > 1 {
            self.current_page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_page_response() -> EventPage {
        EventPage {
            events: vec![],
            total: 11,
            current_page: 1,
            total_pages: 2,
        }
    }

    #[test]
    fn starts_on_page_one() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_pages, 1);
    }

    #[test]
    fn go_to_page_is_a_noop_outside_the_valid_range() {
        let mut pagination = Pagination::new(10);
        pagination.apply_response(&two_page_response());

        assert!(!pagination.go_to_page(0));
        assert!(!pagination.go_to_page(3));
        assert_eq!(pagination.current_page, 1);

        assert!(pagination.go_to_page(2));
        assert_eq!(pagination.current_page, 2);
    }

    #[test]
    fn next_and_prev_clamp_at_the_edges() {
        let mut pagination = Pagination::new(10);
        pagination.apply_response(&two_page_response());

        assert!(!pagination.prev());
        assert!(pagination.next());
        assert!(!pagination.next());
        assert_eq!(pagination.current_page, 2);
        assert!(pagination.prev());
        assert_eq!(pagination.current_page, 1);
    }

    #[test]
    fn deleting_the_sole_row_on_page_two_steps_back_to_page_one() {
        let mut pagination = Pagination::new(10);
        pagination.apply_response(&EventPage {
            events: vec![],
            total: 11,
            current_page: 2,
            total_pages: 2,
        });

        pagination.step_back_if_emptied(0);
        assert_eq!(pagination.current_page, 1);
    }

    #[test]
    fn delete_with_rows_remaining_stays_on_the_page() {
        let mut pagination = Pagination::new(10);
        pagination.apply_response(&EventPage {
            events: vec![],
            total: 15,
            current_page: 2,
            total_pages: 2,
        });

        pagination.step_back_if_emptied(4);
        assert_eq!(pagination.current_page, 2);
    }

    #[test]
    fn emptying_the_first_page_never_goes_below_page_one() {
        let mut pagination = Pagination::new(10);
        pagination.step_back_if_emptied(0);
        assert_eq!(pagination.current_page, 1);
    }
}
