//! Certificate form rendering
//!
//! This crate maps a parsed certificate document onto the numbered boxes
//! of the China-Australia FTA Certificate of Origin form:
//! - Line item flattening for the goods table (boxes 6-12)
//! - Section view models for the party, transport and signature boxes
//! - HTML rendering through an embedded Tera template
//!
//! # Example
//!
//! ```
//! use coo_model::parse_document;
//! use coo_template::CertificateRenderer;
//!
//! let document = parse_document("{}").unwrap();
//! let renderer = CertificateRenderer::new().unwrap();
//! let html = renderer.render(&document).unwrap();
//! assert!(html.contains("CERTIFICATE OF ORIGIN"));
//! ```

mod flatten;
mod renderer;
mod sections;

pub use flatten::{flatten_line_items, LineItemRow};
pub use renderer::CertificateRenderer;
pub use sections::{
    CertificateView, CertificationView, DeclarationView, PartyView, TransportView,
};

use thiserror::Error;

/// Errors that can occur during certificate rendering
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Render error: {0}")]
    RenderError(#[from] tera::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, TemplateError>;
