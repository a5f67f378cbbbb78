use crate::render::TableStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default load file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "library.csv";
pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const MIN_CHART_WIDTH: usize = 10;
pub const MAX_CHART_WIDTH: usize = 200;

/// User settings read from `bookshelf.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog file loaded at startup
    pub data_file: PathBuf,
    /// Border style for tables
    pub table_style: TableStyle,
    /// Width of chart bars in characters
    pub chart_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            table_style: TableStyle::default(),
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl Settings {
    /// Clamp out-of-range values into their supported bounds
    pub fn normalized(mut self) -> Self {
        self.chart_width = self.chart_width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH);
        self
    }
}
