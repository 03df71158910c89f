//! Certificate rendering

use coo_model::ChaftaCooDocument;
use tera::{Context, Tera};

use crate::sections::CertificateView;
use crate::Result;

/// Embedded HTML template for the certificate form
///
/// Registered under an `.html` name so Tera auto-escapes bound values.
const CERTIFICATE_TEMPLATE: &str = include_str!("../templates/certificate.html");

const TEMPLATE_NAME: &str = "certificate.html";

/// Certificate renderer
///
/// Compiles the embedded form template once; `render` can then be called
/// for any number of documents.
pub struct CertificateRenderer {
    tera: Tera,
}

impl CertificateRenderer {
    /// Create a renderer with the embedded form template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, CERTIFICATE_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the certificate as a complete HTML page
    ///
    /// Rendering is a pure function of the document: partial documents
    /// produce a form with blank boxes, never an error.
    pub fn render(&self, document: &ChaftaCooDocument) -> Result<String> {
        let view = CertificateView::from_document(document)?;
        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coo_model::parse_document;

    #[test]
    fn test_render_empty_document() {
        let renderer = CertificateRenderer::new().unwrap();
        let html = renderer.render(&ChaftaCooDocument::default()).unwrap();

        assert!(html.contains("CERTIFICATE OF ORIGIN"));
        assert!(html.contains("Form for China-Australia Free Trade Agreement"));
        assert!(html.contains("Issued in: AUSTRALIA"));
    }

    #[test]
    fn test_render_escapes_document_values() {
        let document = parse_document(
            r#"{ "supplyChainConsignment": { "exporter": { "name": "<script>alert(1)</script>" } } }"#,
        )
        .unwrap();

        let renderer = CertificateRenderer::new().unwrap();
        let html = renderer.render(&document).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
