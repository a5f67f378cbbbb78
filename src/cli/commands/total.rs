use super::CommandHandler;
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::Result;
use std::io::Write;

/// Handler for the `total` command
pub struct TotalCommand;

impl CommandHandler for TotalCommand {
    fn execute(&self, catalog: &Catalog, _settings: &Settings, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", catalog.total_amount())?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "total"
    }
}
