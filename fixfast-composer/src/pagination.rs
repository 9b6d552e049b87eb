//! Pagination windower
//!
//! Pure page-number math shared by the product list and the order list.

/// Items per page in both lists
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Above this many pages the window collapses with ellipsis markers
const WINDOW_THRESHOLD: u32 = 7;

/// One element of a rendered page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Compute the bounded page-number sequence for a pager.
///
/// Up to 7 pages are returned verbatim. Beyond that the strip always keeps
/// the first and last page, the neighbors of the current page, and collapses
/// the gaps into ellipsis markers.
pub fn window(total_pages: u32, current_page: u32) -> Vec<PageItem> {
    if total_pages <= WINDOW_THRESHOLD {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];

    if current_page > 3 {
        items.push(PageItem::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);
    for page in start..=end {
        if page != 1 && page != total_pages {
            items.push(PageItem::Page(page));
        }
    }

    if current_page < total_pages - 2 {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(total_pages));
    items
}

/// Current-page state for a windowed list
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
    current_page: u32,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator with the given page size
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_items.div_ceil(self.page_size) as u32
    }

    /// Change the current page. Out-of-range requests are a no-op. Returns
    /// true when the page changed, which is the caller's signal to scroll
    /// back to the top of the list.
    pub fn change_page(&mut self, requested: u32) -> bool {
        if requested < 1 || requested > self.total_pages() {
            return false;
        }
        self.current_page = requested;
        true
    }

    /// Index range of the current page into the backing list
    pub fn slice(&self) -> std::ops::Range<usize> {
        let start = (self.current_page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_items);
        start.min(end)..end
    }

    /// Update for a new item count, clamping the current page when the list
    /// shrank below it
    pub fn resync(&mut self, total_items: usize) {
        self.total_items = total_items;
        let total_pages = self.total_pages();
        if total_pages > 0 && self.current_page > total_pages {
            self.current_page = total_pages;
        } else if total_items == 0 {
            self.current_page = 1;
        }
    }

    /// Page strip for the current state
    pub fn window(&self) -> Vec<PageItem> {
        window(self.total_pages(), self.current_page)
    }
}
