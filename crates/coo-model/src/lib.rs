//! Document model for the China-Australia FTA Certificate of Origin
//!
//! This crate provides:
//! - Typed schema for the certificate document (consignment, parties,
//!   line items, transport, signatures)
//! - Document parsing from JSON
//!
//! Every field of the wire format is optional; partial documents parse
//! and render with blanks rather than failing.
//!
//! # Example
//!
//! ```
//! use coo_model::parse_document;
//!
//! let document = parse_document(r#"{ "iD": "wfa.org.au:coo:0001" }"#).unwrap();
//! assert_eq!(document.id.as_deref(), Some("wfa.org.au:coo:0001"));
//! ```

mod document;

pub use document::*;

use thiserror::Error;

/// Errors that can occur while reading a certificate document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to parse document: {0}")]
    ParseError(String),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Parse a certificate document from a JSON string
pub fn parse_document(json: &str) -> Result<ChaftaCooDocument> {
    serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let document = parse_document("{}").unwrap();
        assert!(document.id.is_none());
        assert!(document.supply_chain_consignment.is_none());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_document("not json");
        assert!(result.is_err());
    }
}
