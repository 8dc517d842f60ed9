//! Error types for the depot parcel system
//!
//! This module defines all error types that can occur while loading depot
//! data and processing collections.
//!
//! # Error Categories
//!
//! - **Load Errors**: File not found, unreadable source, malformed header.
//!   These abort a whole load.
//! - **Record Errors**: A single malformed input line. The line is dropped
//!   and loading continues.
//! - **Transaction Errors**: Empty queue, unknown parcel identifier.
//! - **Input Errors**: Malformed user-entered parcel or customer data.

use thiserror::Error;

/// Main error type for the depot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DepotError {
    /// File not found at the specified path
    ///
    /// Fatal for the load that requested it.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The mandatory first line of a parcel file is wrong or missing
    #[error("Invalid header: expected '{expected}', found {}", found.as_deref().map(|f| format!("'{}'", f)).unwrap_or_else(|| "end of file".to_string()))]
    InvalidHeader {
        /// The literal the first line must equal
        expected: String,
        /// What was actually read (None at end of file)
        found: Option<String>,
    },

    /// The column header line after the parcel header is missing
    #[error("Missing column header line")]
    MissingColumnHeader,

    /// The source has no readable first line
    #[error("Source is empty: {path}")]
    EmptySource {
        /// Path or description of the empty source
        path: String,
    },

    /// A load finished without producing a single record
    #[error("No records loaded from {input}")]
    NoRecordsLoaded {
        /// Path or description of the input
        input: String,
    },

    /// A single input line could not be parsed
    ///
    /// Recoverable: the line is skipped and loading continues.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// `process_next` was called with nobody waiting
    #[error("No customers in queue to process")]
    QueueEmpty,

    /// The customer's parcel is not in the store
    ///
    /// The customer has already left the queue when this is reported.
    #[error("Parcel {parcel_id} not found for customer {customer}")]
    ParcelNotFound {
        /// Parcel identifier that was looked up
        parcel_id: String,
        /// Name of the customer who asked for it
        customer: String,
    },

    /// A fee total does not fit in a `Decimal`
    #[error("Fee total overflowed while adding the fee for parcel {parcel_id}")]
    FeeOverflow {
        /// Parcel whose fee could not be added
        parcel_id: String,
    },

    /// User-entered parcel data was rejected
    #[error("Invalid parcel: {message}")]
    InvalidParcel { message: String },

    /// User-entered customer data was rejected
    #[error("Invalid customer: {message}")]
    InvalidCustomer { message: String },
}

impl From<std::io::Error> for DepotError {
    fn from(error: std::io::Error) -> Self {
        DepotError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for DepotError {
    fn from(error: csv::Error) -> Self {
        DepotError::IoError {
            message: error.to_string(),
        }
    }
}

impl DepotError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: impl std::fmt::Display) -> Self {
        DepotError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an InvalidHeader error
    pub fn invalid_header(expected: &str, found: Option<&str>) -> Self {
        DepotError::InvalidHeader {
            expected: expected.to_string(),
            found: found.map(str::to_string),
        }
    }

    /// Create an EmptySource error
    pub fn empty_source(path: impl std::fmt::Display) -> Self {
        DepotError::EmptySource {
            path: path.to_string(),
        }
    }

    /// Create a NoRecordsLoaded error
    pub fn no_records_loaded(input: impl std::fmt::Display) -> Self {
        DepotError::NoRecordsLoaded {
            input: input.to_string(),
        }
    }

    /// Create a ParseError for a known line
    pub fn parse_error(line: u64, message: impl Into<String>) -> Self {
        DepotError::ParseError {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a ParcelNotFound error
    pub fn parcel_not_found(parcel_id: &str, customer: &str) -> Self {
        DepotError::ParcelNotFound {
            parcel_id: parcel_id.to_string(),
            customer: customer.to_string(),
        }
    }

    /// Create an InvalidParcel error
    pub fn invalid_parcel(message: impl Into<String>) -> Self {
        DepotError::InvalidParcel {
            message: message.into(),
        }
    }

    /// Create an InvalidCustomer error
    pub fn invalid_customer(message: impl Into<String>) -> Self {
        DepotError::InvalidCustomer {
            message: message.into(),
        }
    }

    /// Whether this error aborts a whole load rather than a single line
    pub fn is_fatal_load_error(&self) -> bool {
        matches!(
            self,
            DepotError::FileNotFound { .. }
                | DepotError::IoError { .. }
                | DepotError::InvalidHeader { .. }
                | DepotError::MissingColumnHeader
                | DepotError::EmptySource { .. }
                | DepotError::NoRecordsLoaded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        DepotError::FileNotFound { path: "parcels.txt".to_string() },
        "File not found: parcels.txt"
    )]
    #[case::io_error(
        DepotError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::invalid_header(
        DepotError::invalid_header("PARCELS", Some("PARCEL")),
        "Invalid header: expected 'PARCELS', found 'PARCEL'"
    )]
    #[case::invalid_header_eof(
        DepotError::invalid_header("PARCELS", None),
        "Invalid header: expected 'PARCELS', found end of file"
    )]
    #[case::parse_error_with_line(
        DepotError::ParseError { line: Some(7), message: "bad weight".to_string() },
        "Parse error at line 7: bad weight"
    )]
    #[case::parse_error_without_line(
        DepotError::ParseError { line: None, message: "bad weight".to_string() },
        "Parse error: bad weight"
    )]
    #[case::queue_empty(DepotError::QueueEmpty, "No customers in queue to process")]
    #[case::parcel_not_found(
        DepotError::parcel_not_found("P404", "Jane Doe"),
        "Parcel P404 not found for customer Jane Doe"
    )]
    #[case::fee_overflow(
        DepotError::FeeOverflow { parcel_id: "X1".to_string() },
        "Fee total overflowed while adding the fee for parcel X1"
    )]
    #[case::invalid_parcel(
        DepotError::invalid_parcel("missing weight"),
        "Invalid parcel: missing weight"
    )]
    #[case::no_records(
        DepotError::no_records_loaded("customers.txt"),
        "No records loaded from customers.txt"
    )]
    fn test_error_display(#[case] error: DepotError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(DepotError::MissingColumnHeader, true)]
    #[case(DepotError::empty_source("c.txt"), true)]
    #[case(DepotError::parse_error(3, "x"), false)]
    #[case(DepotError::QueueEmpty, false)]
    #[case(DepotError::invalid_customer("empty name"), false)]
    fn test_fatal_classification(#[case] error: DepotError, #[case] fatal: bool) {
        assert_eq!(error.is_fatal_load_error(), fatal);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: DepotError = io_error.into();
        assert!(matches!(error, DepotError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
