use crate::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a record inside one [`Catalog`](super::Catalog)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(BookId)
            .map_err(|_| LibraryError::InvalidValue(format!("'{}' is not a book ID", s.trim())))
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Kept as text: the load file never guarantees a numeric year
    pub year: String,
    pub genre: String,
    pub copies: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            copies,
        }
    }

    /// Apply a single field edit. Amount must parse as a non-negative integer;
    /// on failure the book is left untouched.
    pub fn apply_edit(&mut self, field: EditField, value: &str) -> Result<()> {
        match field {
            EditField::Title => self.title = value.to_string(),
            EditField::Author => self.author = value.to_string(),
            EditField::Year => self.year = value.to_string(),
            EditField::Genre => self.genre = value.to_string(),
            EditField::Amount => self.copies = parse_copies(value)?,
        }
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.title, self.author, self.year, self.genre, self.copies
        )
    }
}

/// Parse a copy count entered as text
pub fn parse_copies(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    trimmed.parse::<u32>().map_err(|_| {
        LibraryError::InvalidValue(format!(
            "amount must be a non-negative integer, got '{}'",
            trimmed
        ))
    })
}

/// Editable attributes of a [`Book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Author,
    Year,
    Genre,
    Amount,
}

impl EditField {
    pub fn as_str(self) -> &'static str {
        match self {
            EditField::Title => "title",
            EditField::Author => "author",
            EditField::Year => "year",
            EditField::Genre => "genre",
            EditField::Amount => "amount",
        }
    }
}

impl FromStr for EditField {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(EditField::Title),
            "author" => Ok(EditField::Author),
            "year" => Ok(EditField::Year),
            "genre" | "ganre" => Ok(EditField::Genre),
            "amount" => Ok(EditField::Amount),
            other => Err(LibraryError::InvalidField(other.to_string())),
        }
    }
}

/// Result of a filter over the catalog.
///
/// `NoMatch` is distinct from a match set whose books all have zero copies,
/// so `Found` never carries an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    Found(Vec<(BookId, &'a Book)>),
    NoMatch,
}

impl<'a> Selection<'a> {
    pub(crate) fn from_matches(matches: Vec<(BookId, &'a Book)>) -> Self {
        if matches.is_empty() {
            Selection::NoMatch
        } else {
            Selection::Found(matches)
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Selection::Found(_))
    }

    pub fn books(&self) -> &[(BookId, &'a Book)] {
        match self {
            Selection::Found(books) => books,
            Selection::NoMatch => &[],
        }
    }
}

/// What `add_or_merge` did with the incoming book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Copies were added to an existing record with the same title
    Merged(BookId),
    /// A new record was created
    Inserted(BookId),
}

impl AddOutcome {
    pub fn id(self) -> BookId {
        match self {
            AddOutcome::Merged(id) | AddOutcome::Inserted(id) => id,
        }
    }
}

/// What `remove_one_copy` did with the matching record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Decremented { id: BookId, remaining: u32 },
    Deleted(BookId),
}
