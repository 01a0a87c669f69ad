//! Offset pagination with a fixed page size.
//!
//! Listings take an optional 1-based page number. No page means no
//! pagination: every row is returned. This is unified across both entity
//! types.

/// Fixed page size for all listings.
pub const PAGE_SIZE: u32 = 10;

/// An offset/limit window derived from a page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

/// Map an optional page number to a window. Page 0 is treated as page 1.
pub fn window(page: Option<u32>) -> Option<PageWindow> {
    page.map(|p| {
        let page = p.max(1);
        PageWindow {
            offset: i64::from(page - 1) * i64::from(PAGE_SIZE),
            limit: i64::from(PAGE_SIZE),
        }
    })
}
