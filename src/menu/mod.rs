//! Interactive menu: reads choices from the console and runs searches and reports.
//!
//! The controller owns its input reader and output writer for the lifetime of
//! the loop. Each iteration displays the menu, reads one line, and dispatches:
//!
//! - `1`/`2` search Gutendex by title/author and persist results
//! - `3`..`9` report on the stored catalog
//! - `0` terminates the loop (as does end of input)
//!
//! Only console I/O failures escape [`MenuController::run`]; fetch, decode, and
//! catalog failures are printed and the loop continues.

mod format;
mod option;

pub use format::MENU_TEXT;
pub use option::{InputError, MenuOption, parse_year};

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::catalog::{Author, CatalogError, CatalogRepository};
use crate::dedup::dedupe_by_key;
use crate::gutendex::{
    BookSummary, DecodeError, FetchError, Fetcher, decode_book_summaries, decode_page, search_url,
};
use crate::service::BookService;

/// Failures that end the menu loop.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A catalog query failed. Reported to the user by the dispatcher.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Failures of the two search flows.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Continue,
    Terminated,
}

/// Menu-driven command loop over a fetcher, a catalog, and a console.
pub struct MenuController<F, C, R, W> {
    fetcher: F,
    catalog: C,
    books: BookService<C>,
    api_base_url: String,
    input: R,
    output: W,
}

impl<F, C, R, W> MenuController<F, C, R, W>
where
    F: Fetcher,
    C: CatalogRepository + Clone,
    R: BufRead,
    W: Write,
{
    /// Creates a controller that searches `api_base_url` through `fetcher`,
    /// stores results in `catalog`, and talks to the user over `input`/`output`.
    pub fn new(
        fetcher: F,
        catalog: C,
        api_base_url: impl Into<String>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            fetcher,
            books: BookService::new(catalog.clone()),
            catalog,
            api_base_url: api_base_url.into(),
            input,
            output,
        }
    }

    /// Consumes the controller, returning its output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Io`] if the console cannot be read or written.
    pub async fn run(&mut self) -> Result<(), MenuError> {
        while self.step().await? == LoopState::Continue {}
        Ok(())
    }

    /// Displays the menu, reads one choice, and handles it.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Io`] if the console cannot be read or written.
    pub async fn step(&mut self) -> Result<LoopState, MenuError> {
        writeln!(self.output, "{MENU_TEXT}")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            debug!("End of input, leaving menu");
            return Ok(LoopState::Terminated);
        };

        match MenuOption::parse(&line) {
            Ok(MenuOption::Exit) => {
                writeln!(self.output, "{}", format::GOODBYE)?;
                Ok(LoopState::Terminated)
            }
            Ok(option) => {
                self.dispatch(option).await?;
                Ok(LoopState::Continue)
            }
            Err(error) => {
                debug!(?error, "Rejected menu input");
                writeln!(self.output, "{error}")?;
                Ok(LoopState::Continue)
            }
        }
    }

    #[instrument(skip(self))]
    async fn dispatch(&mut self, option: MenuOption) -> Result<(), MenuError> {
        let result = match option {
            MenuOption::Exit => Ok(()),
            MenuOption::SearchByTitle => self.search_by_title().await,
            MenuOption::SearchByAuthor => self.search_by_author().await,
            MenuOption::ListBooks => self.list_books().await,
            MenuOption::ListBooksByLanguage => self.list_books_by_language().await,
            MenuOption::AuthorsAliveInYear => self.authors_alive_in_year().await,
            MenuOption::AuthorsBornInYear => self.authors_born_in_year().await,
            MenuOption::AuthorsDiedInYear => self.authors_died_in_year().await,
            MenuOption::ListAuthors => self.list_authors().await,
            MenuOption::Top10Downloads => self.top10_downloads().await,
        };

        match result {
            Err(MenuError::Catalog(error)) => {
                warn!(%error, "Catalog query failed");
                writeln!(self.output, "{}: {error}", format::CATALOG_FAILED)?;
                Ok(())
            }
            other => other,
        }
    }

    // ==================== Searches ====================

    async fn search_by_title(&mut self) -> Result<(), MenuError> {
        let Some(title) = self.prompt(format::TITLE_PROMPT)? else {
            return Ok(());
        };
        let outcome = self.fetch_and_store_title(title.trim()).await;
        self.report_search_failure(outcome, format::TITLE_SEARCH_FAILED)
    }

    async fn search_by_author(&mut self) -> Result<(), MenuError> {
        let Some(name) = self.prompt(format::AUTHOR_PROMPT)? else {
            return Ok(());
        };
        let outcome = self.fetch_and_store_author(name.trim()).await;
        self.report_search_failure(outcome, format::AUTHOR_SEARCH_FAILED)
    }

    fn report_search_failure(
        &mut self,
        outcome: Result<(), SearchError>,
        prefix: &str,
    ) -> Result<(), MenuError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(SearchError::Io(error)) => Err(MenuError::Io(error)),
            Err(error) => {
                warn!(%error, "Search failed");
                writeln!(self.output, "{prefix}: {error}")?;
                Ok(())
            }
        }
    }

    /// Fetches one page for `title`, stores results whose exact title is new, and prints them all.
    #[instrument(skip(self))]
    async fn fetch_and_store_title(&mut self, title: &str) -> Result<(), SearchError> {
        if title.is_empty() {
            writeln!(self.output, "{}", format::EMPTY_QUERY)?;
            return Ok(());
        }

        let url = search_url(&self.api_base_url, title);
        let body = self.fetcher.fetch(&url).await?;
        if body.trim().is_empty() {
            writeln!(self.output, "{}", format::EMPTY_RESPONSE)?;
            return Ok(());
        }

        let summaries = decode_book_summaries(&body)?;
        if summaries.is_empty() {
            writeln!(self.output, "{}", format::TITLE_NOT_FOUND)?;
            return Ok(());
        }

        let mut fresh = Vec::new();
        for summary in &summaries {
            if self.catalog.exists_by_title(&summary.title).await? {
                debug!(title = %summary.title, "Title already stored, skipping");
            } else {
                fresh.push(summary);
            }
        }

        let saved = self.save_summaries(fresh).await?;
        if saved > 0 {
            writeln!(self.output, "{}", format::BOOKS_SAVED)?;
        }
        info!(fetched = summaries.len(), saved, "Title search complete");
        self.print_summaries(&summaries)?;
        Ok(())
    }

    /// Follows `next` cursors from the first page, stores every result, and prints them all.
    #[instrument(skip(self))]
    async fn fetch_and_store_author(&mut self, name: &str) -> Result<(), SearchError> {
        if name.is_empty() {
            writeln!(self.output, "{}", format::EMPTY_QUERY)?;
            return Ok(());
        }

        let mut summaries = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(search_url(&self.api_base_url, name));
        let mut pages = 0_usize;

        while let Some(url) = next.take() {
            if !visited.insert(url.clone()) {
                warn!(%url, "Pagination cursor repeats an earlier page, stopping");
                break;
            }
            let body = self.fetcher.fetch(&url).await?;
            if body.trim().is_empty() {
                writeln!(self.output, "{}", format::EMPTY_RESPONSE)?;
                return Ok(());
            }

            let page = decode_page(&body)?;
            pages += 1;
            debug!(page = pages, results = page.results.len(), "Fetched author page");
            summaries.extend(page.results);
            next = page.next;
        }

        if summaries.is_empty() {
            writeln!(self.output, "{}", format::AUTHOR_NOT_FOUND)?;
            return Ok(());
        }

        let saved = self.save_summaries(summaries.iter()).await?;
        info!(pages, fetched = summaries.len(), saved, "Author search complete");
        self.print_summaries(&summaries)?;
        Ok(())
    }

    async fn save_summaries<'a>(
        &mut self,
        summaries: impl IntoIterator<Item = &'a BookSummary>,
    ) -> Result<usize, SearchError> {
        let mut saved = 0;
        for summary in summaries {
            self.catalog.save_book(&summary.to_new_book()).await?;
            saved += 1;
        }
        Ok(saved)
    }

    fn print_summaries(&mut self, summaries: &[BookSummary]) -> io::Result<()> {
        for summary in summaries {
            writeln!(self.output, "{summary}")?;
        }
        Ok(())
    }

    // ==================== Reports ====================

    async fn list_books(&mut self) -> Result<(), MenuError> {
        let books = self.catalog.list_all_books().await?;
        if books.is_empty() {
            writeln!(self.output, "{}", format::NO_BOOKS)?;
        }
        for book in &books {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    async fn list_books_by_language(&mut self) -> Result<(), MenuError> {
        let Some(code) = self.prompt(format::LANGUAGE_PROMPT)? else {
            return Ok(());
        };
        let books = self.catalog.find_books_by_language(code.trim()).await?;
        if books.is_empty() {
            writeln!(self.output, "{}", format::NO_BOOKS_IN_LANGUAGE)?;
        }
        for book in &books {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    async fn authors_alive_in_year(&mut self) -> Result<(), MenuError> {
        let Some(year) = self.prompt_year()? else {
            return Ok(());
        };
        let authors = self.catalog.authors_alive_in_year(year).await?;
        if authors.is_empty() {
            writeln!(self.output, "{}", format::NO_AUTHORS_ALIVE)?;
            return Ok(());
        }
        writeln!(self.output, "{}", format::authors_alive_header(year))?;
        self.print_author_labels(&authors)?;
        Ok(())
    }

    async fn authors_born_in_year(&mut self) -> Result<(), MenuError> {
        let Some(year) = self.prompt_year()? else {
            return Ok(());
        };
        let authors = self.catalog.authors_born_in_year(year).await?;
        if authors.is_empty() {
            writeln!(self.output, "{}", format::NO_AUTHORS_BORN)?;
            return Ok(());
        }
        writeln!(self.output, "{}", format::authors_born_header(year))?;
        self.print_author_labels(&authors)?;
        Ok(())
    }

    async fn authors_died_in_year(&mut self) -> Result<(), MenuError> {
        let Some(year) = self.prompt_year()? else {
            return Ok(());
        };
        let authors = self.catalog.authors_dead_in_year(year).await?;
        if authors.is_empty() {
            writeln!(self.output, "{}", format::no_authors_died(year))?;
            return Ok(());
        }
        writeln!(self.output, "{}", format::authors_died_header(year))?;
        self.print_author_labels(&authors)?;
        Ok(())
    }

    fn print_author_labels(&mut self, authors: &[Author]) -> io::Result<()> {
        let labels = dedupe_by_key(
            authors.iter().map(Author::display_label),
            |label: &String| label.clone(),
        );
        for label in labels {
            writeln!(self.output, "{label}")?;
        }
        Ok(())
    }

    async fn list_authors(&mut self) -> Result<(), MenuError> {
        let names = self.catalog.list_all_author_names().await?;
        if names.is_empty() {
            writeln!(self.output, "{}", format::NO_AUTHORS)?;
            return Ok(());
        }
        writeln!(self.output, "{}", format::AUTHORS_HEADER)?;
        for name in &names {
            writeln!(self.output, "{name}")?;
        }
        Ok(())
    }

    async fn top10_downloads(&mut self) -> Result<(), MenuError> {
        let books = self.books.top10_most_downloaded().await?;
        if books.is_empty() {
            writeln!(self.output, "{}", format::NO_TOP_BOOKS)?;
            return Ok(());
        }
        writeln!(self.output, "{}", format::TOP_BOOKS_HEADER)?;
        for book in &books {
            writeln!(self.output, "{}", format::top_book_line(book))?;
        }
        Ok(())
    }

    // ==================== Console ====================

    /// Reads one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 (e.g. from a Latin-1 terminal) are replaced,
    /// so they surface as invalid input rather than a broken console.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts for a year, printing an input error and yielding `None` when it is not an integer.
    fn prompt_year(&mut self) -> io::Result<Option<i32>> {
        let Some(line) = self.prompt(format::YEAR_PROMPT)? else {
            return Ok(None);
        };
        match parse_year(&line) {
            Ok(year) => Ok(Some(year)),
            Err(error) => {
                writeln!(self.output, "{error}")?;
                Ok(None)
            }
        }
    }
}
