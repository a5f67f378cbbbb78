pub mod chart;
pub mod genre;
pub mod list;
pub mod lookup;
pub mod total;

use crate::catalog::{Book, BookId, Catalog};
use crate::cli::app::Commands;
use crate::config::Settings;
use crate::Result;
use serde::Serialize;
use std::io::Write;

pub use chart::ChartCommand;
pub use genre::GenreCommand;
pub use list::ListCommand;
pub use lookup::{LookupCommand, LookupKey};
pub use total::TotalCommand;

/// Common trait for read-only catalog commands.
///
/// Handlers write to `out` instead of stdout so the interactive menu and the
/// one-shot CLI share them.
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self, catalog: &Catalog, settings: &Settings, out: &mut dyn Write) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Build the handler for a one-shot command. `None` for the interactive shell.
pub fn handler_for(command: Commands) -> Option<Box<dyn CommandHandler>> {
    match command {
        Commands::Shell => None,
        Commands::List { json } => Some(Box::new(ListCommand::new(json))),
        Commands::Total => Some(Box::new(TotalCommand)),
        Commands::Genre => Some(Box::new(GenreCommand)),
        Commands::Author { name, json } => {
            Some(Box::new(LookupCommand::new(LookupKey::Author(name), json)))
        }
        Commands::Year { year, json } => {
            Some(Box::new(LookupCommand::new(LookupKey::Year(year), json)))
        }
        Commands::Chart { kind } => Some(Box::new(ChartCommand::new(kind))),
    }
}

/// JSON shape of a listed book
#[derive(Serialize)]
struct BookEntry<'a> {
    id: BookId,
    #[serde(flatten)]
    book: &'a Book,
}

fn write_json_books<'a, I>(entries: I, out: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = (BookId, &'a Book)>,
{
    let entries: Vec<BookEntry<'a>> = entries
        .into_iter()
        .map(|(id, book)| BookEntry { id, book })
        .collect();
    writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    Ok(())
}
