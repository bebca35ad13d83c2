use admin_client::models::Pagination;

/// Pager derived from the server's pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub current: u32,
    pub pages: u32,
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
    /// The pager is only rendered when there is more than one page.
    pub visible: bool,
}

impl PageControls {
    pub fn new(pagination: &Pagination) -> Self {
        let pages = pagination.pages.max(1);
        let current = pagination.current.clamp(1, pages);

        Self {
            current,
            pages,
            total: pagination.total,
            has_previous: current > 1,
            has_next: current < pages,
            visible: pages > 1,
        }
    }

    /// Page buttons, `1..=pages`.
    pub fn page_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.pages
    }

    pub fn summary(&self) -> String {
        format!("Showing page {} of {}", self.current, self.pages)
    }

    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_enables_both_directions() {
        let controls = PageControls::new(&Pagination {
            current: 2,
            pages: 3,
            total: 45,
        });

        assert!(controls.has_previous);
        assert!(controls.has_next);
        assert!(controls.visible);
        assert_eq!(controls.summary(), "Showing page 2 of 3");
        assert_eq!(controls.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn edges_disable_buttons() {
        let first = PageControls::new(&Pagination {
            current: 1,
            pages: 3,
            total: 45,
        });
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = PageControls::new(&Pagination {
            current: 3,
            pages: 3,
            total: 45,
        });
        assert!(last.has_previous);
        assert!(!last.has_next);
    }

    #[test]
    fn single_or_empty_result_hides_pager() {
        let empty = PageControls::new(&Pagination {
            current: 1,
            pages: 0,
            total: 0,
        });

        assert!(!empty.visible);
        assert_eq!(empty.pages, 1);
        assert_eq!(empty.clamp(9), 1);
        assert_eq!(empty.clamp(0), 1);
    }
}
