//! Integration tests for loading and mutating a catalog from disk

mod common;

use bookshelf::catalog::{AddOutcome, Book, BookId, Catalog, RemoveOutcome, Selection};
use bookshelf::LibraryError;
use common::{sample_library, write_catalog};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_sample_library() {
    let (_temp_dir, path) = sample_library();
    let catalog = Catalog::load_file(&path).unwrap();

    assert_eq!(catalog.len(), 4);
    let ids: Vec<BookId> = catalog.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![BookId(0), BookId(1), BookId(2), BookId(3)]);
    assert_eq!(catalog.total_amount(), 10);
    assert_eq!(catalog.most_popular_genre(), "Classic");
}

#[test]
fn test_duplicate_rows_are_not_merged_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(
        temp_dir.path(),
        "dup.csv",
        &["Dune,Herbert,1965,SciFi,2", "Dune,Herbert,1965,SciFi,3"],
    );

    let catalog = Catalog::load_file(&path).unwrap();
    let rows: Vec<(BookId, u32)> = catalog.iter().map(|(id, b)| (id, b.copies)).collect();
    assert_eq!(rows, vec![(BookId(0), 2), (BookId(1), 3)]);
}

#[test]
fn test_each_load_starts_ids_from_zero() {
    let (_temp_dir, path) = sample_library();
    let first = Catalog::load_file(&path).unwrap();
    let second = Catalog::load_file(&path).unwrap();

    assert_eq!(first.iter().next().map(|(id, _)| id), Some(BookId(0)));
    assert_eq!(second.iter().next().map(|(id, _)| id), Some(BookId(0)));
}

#[test]
fn test_bad_header_fails_regardless_of_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("english.csv");
    fs::write(
        &path,
        "Title,Author,Year,Genre,Copies\nDune,Herbert,1965,SciFi,2\n",
    )
    .unwrap();

    assert!(matches!(
        Catalog::load_file(&path),
        Err(LibraryError::Format(_))
    ));
}

#[test]
fn test_malformed_row_aborts_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(
        temp_dir.path(),
        "bad.csv",
        &["Dune,Herbert,1965,SciFi,2", "Emma,Austen,1815,Classic,one"],
    );

    match Catalog::load_file(&path) {
        Err(LibraryError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        Catalog::load_file(temp_dir.path().join("absent.csv")),
        Err(LibraryError::Io(_))
    ));
}

#[test]
fn test_session_of_mutations() {
    let (_temp_dir, path) = sample_library();
    let mut catalog = Catalog::load_file(&path).unwrap();

    assert_eq!(
        catalog
            .add_or_merge(Book::new("Emma", "Austen", "1815", "Classic", 2))
            .unwrap(),
        AddOutcome::Merged(BookId(1))
    );
    assert_eq!(
        catalog
            .add_or_merge(Book::new("Hyperion", "Simmons", "1989", "SciFi", 1))
            .unwrap(),
        AddOutcome::Inserted(BookId(4))
    );
    assert_eq!(catalog.len(), 5);

    assert_eq!(
        catalog.remove_one_copy("Hyperion").unwrap(),
        RemoveOutcome::Deleted(BookId(4))
    );
    assert_eq!(
        catalog.remove_one_copy("Persuasion").unwrap(),
        RemoveOutcome::Decremented {
            id: BookId(2),
            remaining: 3
        }
    );

    catalog.edit_field(BookId(0), "amount", "9").unwrap();
    assert_eq!(catalog.total_amount(), 9 + 3 + 3 + 3);

    match catalog.by_author("Austen") {
        Selection::Found(books) => assert_eq!(books.len(), 2),
        Selection::NoMatch => panic!("expected Austen books"),
    }
    assert_eq!(catalog.by_year("1989"), Selection::NoMatch);
    assert_eq!(catalog.most_popular_genre(), "SciFi");
}
