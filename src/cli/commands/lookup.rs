use super::{write_json_books, CommandHandler};
use crate::catalog::{Catalog, Selection};
use crate::config::Settings;
use crate::render::table::books_table;
use crate::{LibraryError, Result};
use std::io::Write;

/// Exact-match key for a catalog lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Author(String),
    Year(String),
}

/// Handler for the `author` and `year` commands
pub struct LookupCommand {
    pub key: LookupKey,
    pub json: bool,
}

impl CommandHandler for LookupCommand {
    fn execute(&self, catalog: &Catalog, settings: &Settings, out: &mut dyn Write) -> Result<()> {
        let selection = match &self.key {
            LookupKey::Author(author) => catalog.by_author(author),
            LookupKey::Year(year) => catalog.by_year(year),
        };

        let books = match selection {
            Selection::Found(books) => books,
            Selection::NoMatch => {
                let what = match self.key {
                    LookupKey::Author(_) => "Author",
                    LookupKey::Year(_) => "Year",
                };
                return Err(LibraryError::NotFound(what.to_string()));
            }
        };

        if self.json {
            return write_json_books(books, out);
        }

        writeln!(
            out,
            "{}",
            books_table(books.iter().map(|(_, book)| *book), settings.table_style)
        )?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        match self.key {
            LookupKey::Author(_) => "author",
            LookupKey::Year(_) => "year",
        }
    }
}

impl LookupCommand {
    /// Create new lookup command
    pub fn new(key: LookupKey, json: bool) -> Self {
        Self { key, json }
    }
}
