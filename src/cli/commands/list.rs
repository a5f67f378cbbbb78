use super::{write_json_books, CommandHandler};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::render::table::catalog_table;
use crate::Result;
use std::io::Write;

/// Handler for the `list` command
pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, catalog: &Catalog, settings: &Settings, out: &mut dyn Write) -> Result<()> {
        if self.json {
            return write_json_books(catalog.iter(), out);
        }

        writeln!(out, "{}", catalog_table(catalog.iter(), settings.table_style))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}
