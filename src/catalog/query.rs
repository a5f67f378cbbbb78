use crate::catalog::store::Catalog;
use crate::catalog::types::{Book, BookId, Selection};
use indexmap::IndexMap;

/// Read-only aggregation engine over a [`Catalog`].
///
/// Groupings weigh each book by its copy count, not by record count, and keep
/// categories in first-seen order (ascending book ID). Keys are compared as
/// exact strings with no case or whitespace normalization.
pub struct CatalogQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogQuery<'a> {
    /// Create new query over the given catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Sum of copies across all books
    pub fn total_copies(&self) -> u64 {
        self.catalog
            .iter()
            .map(|(_, book)| u64::from(book.copies))
            .sum()
    }

    /// Books whose author matches exactly
    pub fn by_author(&self, author: &str) -> Selection<'a> {
        self.filter(|book| book.author == author)
    }

    /// Books whose year matches exactly
    pub fn by_year(&self, year: &str) -> Selection<'a> {
        self.filter(|book| book.year == year)
    }

    /// Books matching an arbitrary predicate, in ID order
    pub fn filter<F>(&self, predicate: F) -> Selection<'a>
    where
        F: Fn(&Book) -> bool,
    {
        Selection::from_matches(
            self.catalog
                .iter()
                .filter(|(_, book)| predicate(*book))
                .collect::<Vec<(BookId, &'a Book)>>(),
        )
    }

    /// Copies per genre
    pub fn genre_weights(&self) -> IndexMap<&'a str, u64> {
        self.weights_by(|book| book.genre.as_str())
    }

    /// Copies per publication year
    pub fn year_weights(&self) -> IndexMap<&'a str, u64> {
        self.weights_by(|book| book.year.as_str())
    }

    /// Group books by `key`, summing copies per group
    pub fn weights_by<F>(&self, key: F) -> IndexMap<&'a str, u64>
    where
        F: Fn(&'a Book) -> &'a str,
    {
        let mut weights = IndexMap::new();
        for (_, book) in self.catalog.iter() {
            *weights.entry(key(book)).or_insert(0) += u64::from(book.copies);
        }
        weights
    }

    /// Every genre reaching the highest copy total, in first-seen order.
    /// Empty for an empty catalog.
    pub fn most_popular_genres(&self) -> Vec<&'a str> {
        let weights = self.genre_weights();
        let Some(max) = weights.values().copied().max() else {
            return Vec::new();
        };

        weights
            .into_iter()
            .filter(|(_, weight)| *weight == max)
            .map(|(genre, _)| genre)
            .collect()
    }
}
