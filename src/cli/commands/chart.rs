use super::CommandHandler;
use crate::catalog::Catalog;
use crate::cli::app::ChartKind;
use crate::config::Settings;
use crate::render::chart::{bar_chart, pie_chart};
use crate::Result;
use std::io::Write;

/// Handler for the `chart` command
pub struct ChartCommand {
    pub kind: ChartKind,
}

impl CommandHandler for ChartCommand {
    fn execute(&self, catalog: &Catalog, settings: &Settings, out: &mut dyn Write) -> Result<()> {
        let query = catalog.query();
        let (title, chart) = match self.kind {
            ChartKind::Genres => (
                "Copies by genre",
                pie_chart(&query.genre_weights(), settings.chart_width),
            ),
            ChartKind::Years => (
                "Copies by year",
                bar_chart(&query.year_weights(), settings.chart_width),
            ),
        };

        writeln!(out, "{}\n{}", title, chart)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "chart"
    }
}

impl ChartCommand {
    /// Create new chart command
    pub fn new(kind: ChartKind) -> Self {
        Self { kind }
    }
}
