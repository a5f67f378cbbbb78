use crate::catalog::loader;
use crate::catalog::query::CatalogQuery;
use crate::catalog::types::{AddOutcome, Book, BookId, EditField, RemoveOutcome, Selection};
use crate::{LibraryError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// In-memory book collection keyed by [`BookId`].
///
/// Each catalog owns its ID counter, which starts at zero and only grows, so
/// IDs are never reused after a deletion. Ascending ID order is insertion
/// order and is used for every scan and listing.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
    next_id: u64,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a load file stream. Either every line loads or
    /// nothing does.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut catalog = Self::new();
        for book in loader::read_books(reader)? {
            catalog.insert(book);
        }
        info!(books = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Open and load a catalog file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {:?}", path);
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    /// Insert `book` as a new record, even if its title is already present
    pub fn insert(&mut self, book: Book) -> BookId {
        let id = BookId(self.next_id);
        self.next_id += 1;
        debug!(%id, title = %book.title, "Inserted book");
        self.books.insert(id, book);
        id
    }

    /// Add copies to the first book with the same title, or insert a new record.
    ///
    /// A merge that would overflow the copy count fails and leaves the
    /// existing record unchanged.
    pub fn add_or_merge(&mut self, book: Book) -> Result<AddOutcome> {
        if let Some((id, existing)) = self
            .books
            .iter_mut()
            .find(|(_, existing)| existing.title == book.title)
        {
            let copies = existing.copies.checked_add(book.copies).ok_or_else(|| {
                LibraryError::InvalidValue(format!(
                    "book {} already has {} copies, adding {} exceeds {}",
                    id,
                    existing.copies,
                    book.copies,
                    u32::MAX
                ))
            })?;
            existing.copies = copies;
            debug!(%id, copies = existing.copies, "Merged copies into existing book");
            return Ok(AddOutcome::Merged(*id));
        }

        Ok(AddOutcome::Inserted(self.insert(book)))
    }

    /// Take one copy of `title` out of the catalog.
    ///
    /// The first book (by ID) with this title and at least one copy is
    /// affected. Its last copy deletes the record.
    pub fn remove_one_copy(&mut self, title: &str) -> Result<RemoveOutcome> {
        let (id, book) = self
            .books
            .iter_mut()
            .find(|(_, book)| book.title == title && book.copies > 0)
            .ok_or_else(|| LibraryError::NotFound("Book".to_string()))?;
        let id = *id;

        if book.copies > 1 {
            book.copies -= 1;
            debug!(%id, remaining = book.copies, "Removed one copy");
            return Ok(RemoveOutcome::Decremented {
                id,
                remaining: book.copies,
            });
        }

        self.books.remove(&id);
        debug!(%id, "Removed last copy, book deleted");
        Ok(RemoveOutcome::Deleted(id))
    }

    /// Edit one attribute of a book, naming the field as text
    pub fn edit_field(&mut self, id: BookId, field: &str, value: &str) -> Result<()> {
        if !self.books.contains_key(&id) {
            return Err(not_found(id));
        }
        let field = field.parse::<EditField>()?;
        self.apply_edit(id, field, value)
    }

    /// Edit one attribute of a book
    pub fn apply_edit(&mut self, id: BookId, field: EditField, value: &str) -> Result<()> {
        let book = self.books.get_mut(&id).ok_or_else(|| not_found(id))?;
        book.apply_edit(field, value)?;
        debug!(%id, field = field.as_str(), "Edited book");
        Ok(())
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in ascending ID order
    pub fn iter(&self) -> impl Iterator<Item = (BookId, &Book)> + '_ {
        self.books.iter().map(|(id, book)| (*id, book))
    }

    /// Aggregation view over this catalog
    pub fn query(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self)
    }

    /// Total copies held; 0 when empty
    pub fn total_amount(&self) -> u64 {
        self.query().total_copies()
    }

    pub fn by_author(&self, author: &str) -> Selection<'_> {
        self.query().by_author(author)
    }

    pub fn by_year(&self, year: &str) -> Selection<'_> {
        self.query().by_year(year)
    }

    /// Tied top genres joined with ", "; empty string for an empty catalog
    pub fn most_popular_genre(&self) -> String {
        self.query().most_popular_genres().join(", ")
    }
}

fn not_found(id: BookId) -> LibraryError {
    LibraryError::NotFound(format!("Book with ID {}", id))
}
