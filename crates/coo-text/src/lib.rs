//! Coo Text - value formatting for certificate rendering
//!
//! This crate provides the display formatting the printed form needs:
//! - Calendar date formatting for ISO 8601 timestamps
//! - Namespaced identifier handling (`scheme:value` -> `value`)
//! - Package quantity text (gross volume / gross weight)
//!
//! # Example
//!
//! ```
//! use coo_text::{format_calendar_date, reference_suffix};
//!
//! let date = format_calendar_date("2020-04-01T14:30:00Z");
//! assert_eq!(date.as_deref(), Some("2020-04-01"));
//!
//! assert_eq!(reference_suffix("urn:scheme:12345"), "12345");
//! ```

mod formatter;

pub use formatter::{format_calendar_date, format_quantity, reference_suffix};
