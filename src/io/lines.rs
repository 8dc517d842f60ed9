//! Line-oriented input shared by the parcel and customer readers
//!
//! Opens input files, reads header lines, and yields the non-blank data lines
//! that follow together with their 1-based line numbers.

use crate::types::DepotError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Open an input file for buffered line reading
///
/// # Errors
///
/// - `DepotError::FileNotFound` if nothing exists at `path`
/// - `DepotError::IoError` for any other failure to open
pub fn open_input(path: &Path) -> Result<BufReader<File>, DepotError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DepotError::file_not_found(path.display()),
        _ => DepotError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        },
    })?;
    Ok(BufReader::with_capacity(8 * 1024, file))
}

/// Non-blank data lines of an input, numbered from the start of the input
#[derive(Debug)]
pub struct DataLines<R> {
    lines: Lines<R>,
    line_num: u64,
}

impl<R: BufRead> DataLines<R> {
    pub fn new(reader: R) -> Self {
        DataLines {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Read the next line verbatim, blank or not
    ///
    /// Used for header lines. Returns `Ok(None)` at end of input.
    pub fn next_raw(&mut self) -> Result<Option<String>, DepotError> {
        match self.lines.next() {
            Some(Ok(line)) => {
                self.line_num += 1;
                Ok(Some(line))
            }
            Some(Err(e)) => {
                self.line_num += 1;
                Err(e.into())
            }
            None => Ok(None),
        }
    }

    /// Number of the line most recently read
    pub fn line_num(&self) -> u64 {
        self.line_num
    }
}

impl<R: BufRead> Iterator for DataLines<R> {
    type Item = Result<(u64, String), DepotError>;

    /// Next non-blank line with its line number
    ///
    /// A line that is not valid UTF-8 is reported as a recoverable
    /// `ParseError`; any other read failure is an `IoError`.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let result = self.lines.next()?;
            self.line_num += 1;

            match result {
                Ok(line) if line.trim().is_empty() => {
                    tracing::trace!(line = self.line_num, "skipping empty line");
                    continue;
                }
                Ok(line) => return Some(Ok((self.line_num, line))),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Some(Err(DepotError::parse_error(self.line_num, e.to_string())))
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_blank_lines_are_skipped_but_counted() {
        let mut lines = DataLines::new(Cursor::new("head\n\nfirst\n   \n\tsecond\n"));

        assert_eq!(lines.next_raw().unwrap().as_deref(), Some("head"));
        let data: Vec<(u64, String)> = lines.by_ref().map(Result::unwrap).collect();

        assert_eq!(
            data,
            vec![(3, "first".to_string()), (5, "\tsecond".to_string())]
        );
    }

    #[test]
    fn test_next_raw_at_end_of_input() {
        let mut lines = DataLines::new(Cursor::new(""));
        assert_eq!(lines.next_raw().unwrap(), None);
        assert_eq!(lines.line_num(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_recoverable() {
        let bytes: &[u8] = b"ok\n\xff\xfe\nalso ok\n";
        let results: Vec<_> = DataLines::new(Cursor::new(bytes)).collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(DepotError::ParseError { line: Some(2), .. })
        ));
        assert_eq!(results[2].as_ref().unwrap().0, 3);
    }

    #[test]
    fn test_open_missing_file() {
        let result = open_input(Path::new("definitely-missing-input.txt"));
        assert!(matches!(result, Err(DepotError::FileNotFound { .. })));
    }
}
