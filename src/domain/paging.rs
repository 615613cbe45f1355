use std::iter::FusedIterator;

use tracing::debug;

use crate::prelude::{AddressBook, AppError, Record};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Walks an address book page by page over the names it held when the cursor was made.
///
/// The cursor owns its snapshot and borrows the book only while a page is produced,
/// so records may be added or deleted between pages. Names added afterwards are not
/// visited. Names deleted afterwards are skipped, and a page left with no records is
/// skipped entirely, so `next_page` never returns an empty page.
#[derive(Debug, Clone)]
pub struct PageCursor {
    names: Vec<String>,
    page_size: usize,
    page: usize,
}

impl PageCursor {
    pub fn new(book: &AddressBook, page_size: usize) -> Result<Self, AppError> {
        if page_size == 0 {
            return Err(AppError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }

        Ok(PageCursor::from_names(book.names(), page_size))
    }

    // Callers guarantee a non-zero page size
    pub(crate) fn from_names<'a>(names: impl Iterator<Item = &'a str>, page_size: usize) -> Self {
        PageCursor {
            names: names.map(str::to_string).collect(),
            page_size,
            page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether snapshot positions remain. Positions whose names have all been deleted
    /// still count, so `next_page` may return `None` while this is `false`.
    pub fn is_exhausted(&self) -> bool {
        self.page_start().is_none()
    }

    pub fn next_page<'a>(&mut self, book: &'a AddressBook) -> Option<Vec<&'a Record>> {
        loop {
            let start = self.page_start()?;
            let end = start.saturating_add(self.page_size).min(self.names.len());
            self.page += 1;

            let page: Vec<&Record> = self.names[start..end]
                .iter()
                .filter_map(|name| {
                    let record = book.find(name);
                    if record.is_none() {
                        debug!(name = %name, "skipping record deleted since paging started");
                    }
                    record
                })
                .collect();

            if !page.is_empty() {
                return Some(page);
            }
        }
    }

    fn page_start(&self) -> Option<usize> {
        self.page
            .checked_mul(self.page_size)
            .filter(|&start| start < self.names.len())
    }
}

#[derive(Debug)]
pub struct Pages<'a> {
    book: &'a AddressBook,
    cursor: PageCursor,
}

impl<'a> Pages<'a> {
    pub fn new(book: &'a AddressBook, page_size: usize) -> Result<Self, AppError> {
        Ok(Pages {
            book,
            cursor: PageCursor::new(book, page_size)?,
        })
    }

    pub(crate) fn from_cursor(book: &'a AddressBook, cursor: PageCursor) -> Self {
        Pages { book, cursor }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_page(self.book)
    }
}

impl FusedIterator for Pages<'_> {}
