use crate::catalog::{Book, BookId};
use serde::{Deserialize, Serialize};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Border style used for console tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Plain ASCII grid
    #[default]
    Grid,
    Rounded,
    Psql,
    Markdown,
}

/// Table row for full catalog listings
#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Ganre")]
    genre: String,
    #[tabled(rename = "Amount")]
    amount: u32,
}

/// Table row for author/year query results
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Ganre")]
    genre: String,
    #[tabled(rename = "Amount")]
    amount: u32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
            genre: book.genre.clone(),
            amount: book.copies,
        }
    }
}

/// Render `(id, book)` pairs with an ID column
pub fn catalog_table<'a, I>(entries: I, style: TableStyle) -> String
where
    I: IntoIterator<Item = (BookId, &'a Book)>,
{
    let rows: Vec<CatalogRow> = entries
        .into_iter()
        .map(|(id, book)| CatalogRow {
            id: id.0,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.clone(),
            genre: book.genre.clone(),
            amount: book.copies,
        })
        .collect();

    finish(Table::new(rows), style)
}

/// Render books without their IDs
pub fn books_table<'a, I>(books: I, style: TableStyle) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    let rows: Vec<BookRow> = books.into_iter().map(BookRow::from).collect();
    finish(Table::new(rows), style)
}

fn finish(mut table: Table, style: TableStyle) -> String {
    match style {
        TableStyle::Grid => table.with(Style::ascii()),
        TableStyle::Rounded => table.with(Style::rounded()),
        TableStyle::Psql => table.with(Style::psql()),
        TableStyle::Markdown => table.with(Style::markdown()),
    };
    table
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}
