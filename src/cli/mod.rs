pub mod app;
pub mod commands;
pub mod menu;

pub use app::{ChartKind, Cli, Commands, LogLevel};
pub use menu::Menu;
