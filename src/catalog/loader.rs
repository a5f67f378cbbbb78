//! Load file parsing
//!
//! The load file is a comma-separated table with a fixed Ukrainian header and
//! one book per line. Embedded commas are not escaped, so every data line must
//! split into exactly five fields.

use super::types::Book;
use crate::{LibraryError, Result};
use std::io::BufRead;
use tracing::debug;

/// Exact column header expected on the first line of a load file
pub const HEADER: &str = "Назва,Автор,Рік видання,Жанр,Кількість примірників";

const FIELD_COUNT: usize = 5;

/// Read every book from `reader`, failing on the first malformed line.
pub fn read_books<R: BufRead>(mut reader: R) -> Result<Vec<Book>> {
    let mut raw = Vec::new();
    reader.read_until(b'\n', &mut raw)?;
    let header = std::str::from_utf8(&raw)
        .map_err(|e| LibraryError::Format(format!("header is not valid UTF-8: {}", e)))?;
    check_header(header)?;

    let mut books = Vec::new();
    // Header is line 1
    let mut line_no = 1;
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        line_no += 1;

        let line = std::str::from_utf8(&raw).map_err(|e| LibraryError::Parse {
            line: line_no,
            reason: format!("not valid UTF-8: {}", e),
        })?;
        books.push(parse_line(line.trim_end_matches('\n'), line_no)?);
    }

    debug!(count = books.len(), "Parsed book records");
    Ok(books)
}

/// Validate the raw header line, newline included
pub fn check_header(raw: &str) -> Result<()> {
    if raw.strip_suffix('\n') == Some(HEADER) {
        Ok(())
    } else {
        Err(LibraryError::Format(format!(
            "expected header '{}', found '{}'",
            HEADER,
            raw.trim_end_matches('\n')
        )))
    }
}

/// Parse one data line into a [`Book`]. `line_no` is only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Book> {
    let fields: Vec<&str> = line.trim_end().split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(LibraryError::Parse {
            line: line_no,
            reason: format!(
                "expected {} comma-separated fields, found {}",
                FIELD_COUNT,
                fields.len()
            ),
        });
    }

    let copies = fields[4]
        .trim()
        .parse::<u32>()
        .map_err(|_| LibraryError::Parse {
            line: line_no,
            reason: format!("copies must be a non-negative integer, got '{}'", fields[4]),
        })?;

    Ok(Book::new(fields[0], fields[1], fields[2], fields[3], copies))
}
