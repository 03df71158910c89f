//! WASM bindings for the certificate renderer
//!
//! This crate provides a JavaScript-friendly API for rendering CHAFTA
//! Certificate of Origin documents inside a browser host (the form is
//! normally displayed by a decentralised-renderer web frame).
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { CertificateTemplate, flattenLineItems } from 'chafta-coo-wasm';
//!
//! await init();
//!
//! const template = new CertificateTemplate();
//! const html = template.render(document);
//!
//! // Or let the host lay the goods table out itself
//! const rows = flattenLineItems(document);
//! ```

use coo_model::ChaftaCooDocument;
use coo_template::CertificateRenderer;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Certificate of Origin renderer
#[wasm_bindgen]
pub struct CertificateTemplate {
    renderer: CertificateRenderer,
}

#[wasm_bindgen]
impl CertificateTemplate {
    /// Create a renderer with the embedded form template
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CertificateTemplate, JsValue> {
        let renderer = CertificateRenderer::new().map_err(to_js_error)?;
        Ok(CertificateTemplate { renderer })
    }

    /// Render the certificate as an HTML string
    ///
    /// @param document - Certificate document object
    /// @returns Complete HTML page
    pub fn render(&self, document: JsValue) -> Result<String, JsValue> {
        let document: ChaftaCooDocument = serde_wasm_bindgen::from_value(document)?;
        self.renderer.render(&document).map_err(to_js_error)
    }

    /// Render the certificate from a JSON string
    ///
    /// @param json - Certificate document as JSON text
    /// @returns Complete HTML page
    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self, json: &str) -> Result<String, JsValue> {
        let document = coo_model::parse_document(json).map_err(to_js_error)?;
        self.renderer.render(&document).map_err(to_js_error)
    }
}

/// Flatten the document's consignment items into goods-table rows
///
/// One row per transport package; line-item fields are present on the
/// first row of each line item only. For hosts that render the table
/// themselves.
///
/// @param document - Certificate document object
/// @returns Array of row objects
#[wasm_bindgen(js_name = flattenLineItems)]
pub fn flatten_line_items(document: JsValue) -> Result<JsValue, JsValue> {
    let document: ChaftaCooDocument = serde_wasm_bindgen::from_value(document)?;

    let items = document
        .supply_chain_consignment
        .map(|c| c.included_consignment_items)
        .unwrap_or_default();
    let rows = coo_template::flatten_line_items(&items);

    Ok(serde_wasm_bindgen::to_value(&rows)?)
}

fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_render_empty_document() {
        let template = CertificateTemplate::new().unwrap();
        let html = template.render_json("{}").unwrap();
        assert!(html.contains("CERTIFICATE OF ORIGIN"));
    }

    #[wasm_bindgen_test]
    fn test_render_rejects_invalid_json() {
        let template = CertificateTemplate::new().unwrap();
        assert!(template.render_json("not json").is_err());
    }
}
