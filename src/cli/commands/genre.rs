use super::CommandHandler;
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::Result;
use std::io::Write;

/// Handler for the `genre` command
pub struct GenreCommand;

impl CommandHandler for GenreCommand {
    fn execute(&self, catalog: &Catalog, _settings: &Settings, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", catalog.most_popular_genre())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "genre"
    }
}
