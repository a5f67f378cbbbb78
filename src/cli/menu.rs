//! Interactive numbered menu.
//!
//! Every command runs to completion before the next prompt. Command errors are
//! printed as `Error: ...` and the loop continues; only I/O failures on the
//! streams themselves end the session early. End of input behaves like `Exit`.

use super::app::ChartKind;
use super::commands::{
    ChartCommand, CommandHandler, GenreCommand, ListCommand, LookupCommand, LookupKey,
    TotalCommand,
};
use crate::catalog::types::parse_copies;
use crate::catalog::{AddOutcome, Book, BookId, Catalog, RemoveOutcome};
use crate::config::Settings;
use crate::{LibraryError, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &str = "\
1. Add book
2. Edit book
3. Remove book
5. Show all books
6. Total amount of books
7. Most popular genre
8. Author's books
9. Books by year
10. Pie chart of genres
11. Bar chart of years
12. Exit";

/// Menu entries, keyed by the number the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Remove,
    ShowAll,
    Total,
    PopularGenre,
    AuthorBooks,
    YearBooks,
    GenreChart,
    YearChart,
    Exit,
}

impl MenuChoice {
    /// Map a typed number to an entry. Number 4 is unassigned.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Edit),
            3 => Some(MenuChoice::Remove),
            5 => Some(MenuChoice::ShowAll),
            6 => Some(MenuChoice::Total),
            7 => Some(MenuChoice::PopularGenre),
            8 => Some(MenuChoice::AuthorBooks),
            9 => Some(MenuChoice::YearBooks),
            10 => Some(MenuChoice::GenreChart),
            11 => Some(MenuChoice::YearChart),
            12 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive session over one catalog
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            catalog,
            settings,
            input,
            output,
        }
    }

    /// Show the catalog, then serve menu commands until exit or end of input
    pub fn run(&mut self) -> Result<()> {
        self.run_handler(&ListCommand::new(false))?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;

            let line = match self.prompt("Enter choice: ") {
                Ok(line) => line,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(number) => MenuChoice::from_number(number),
                Err(_) => {
                    writeln!(self.output, "Invalid input")?;
                    continue;
                }
            };
            let Some(choice) = choice else {
                continue;
            };

            debug!(?choice, "Menu command");
            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if is_end_of_input(&e) => break,
                Err(LibraryError::Io(e)) => return Err(LibraryError::Io(e)),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_book()?,
            MenuChoice::Edit => self.edit_book()?,
            MenuChoice::Remove => self.remove_book()?,
            MenuChoice::ShowAll => self.run_handler(&ListCommand::new(false))?,
            MenuChoice::Total => self.run_handler(&TotalCommand)?,
            MenuChoice::PopularGenre => self.run_handler(&GenreCommand)?,
            MenuChoice::AuthorBooks => {
                let author = self.prompt("Enter author: ")?;
                self.run_handler(&LookupCommand::new(LookupKey::Author(author), false))?
            }
            MenuChoice::YearBooks => {
                let year = self.prompt("Enter year: ")?;
                self.run_handler(&LookupCommand::new(LookupKey::Year(year), false))?
            }
            MenuChoice::GenreChart => self.run_handler(&ChartCommand::new(ChartKind::Genres))?,
            MenuChoice::YearChart => self.run_handler(&ChartCommand::new(ChartKind::Years))?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> Result<()> {
        let title = self.prompt("Enter title: ")?;
        let author = self.prompt("Enter author: ")?;
        let year = self.prompt("Enter year: ")?;
        let genre = self.prompt("Enter genre: ")?;
        let copies = parse_copies(&self.prompt("Enter amount: ")?)?;

        match self
            .catalog
            .add_or_merge(Book::new(title, author, year, genre, copies))?
        {
            AddOutcome::Merged(id) => writeln!(self.output, "Added copies to book {}", id)?,
            AddOutcome::Inserted(id) => writeln!(self.output, "Added book {}", id)?,
        }
        Ok(())
    }

    fn edit_book(&mut self) -> Result<()> {
        let id = self.prompt("Enter ID of book to edit: ")?.parse::<BookId>()?;
        let field = self.prompt("Enter field to edit: ")?;
        let value = self.prompt("Enter new value: ")?;

        self.catalog.edit_field(id, &field, &value)?;
        writeln!(self.output, "Updated book {}", id)?;
        Ok(())
    }

    fn remove_book(&mut self) -> Result<()> {
        let title = self.prompt("Enter title of book to remove: ")?;

        match self.catalog.remove_one_copy(&title)? {
            RemoveOutcome::Decremented { id, remaining } => writeln!(
                self.output,
                "Removed one copy of book {} ({} left)",
                id, remaining
            )?,
            RemoveOutcome::Deleted(id) => writeln!(self.output, "Removed book {}", id)?,
        }
        Ok(())
    }

    fn run_handler(&mut self, handler: &dyn CommandHandler) -> Result<()> {
        debug!(command = handler.name(), "Executing command");
        handler.execute(&*self.catalog, self.settings, &mut self.output)
    }

    /// Print `label` and read one line without its line terminator
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LibraryError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn is_end_of_input(error: &LibraryError) -> bool {
    matches!(error, LibraryError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
