//! Book service: aggregate queries offered to the menu on top of the catalog.

use crate::catalog::{Book, CatalogRepository, Result};

/// Service-layer indirection over a [`CatalogRepository`].
#[derive(Debug, Clone)]
pub struct BookService<C> {
    catalog: C,
}

impl<C: CatalogRepository> BookService<C> {
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The ten most downloaded stored books, most downloaded first.
    ///
    /// # Errors
    ///
    /// Returns the catalog error unchanged.
    pub async fn top10_most_downloaded(&self) -> Result<Vec<Book>> {
        self.catalog.top10_by_downloads().await
    }
}
