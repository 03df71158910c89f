//! Certificate Renderer
//!
//! Renders a CHAFTA Certificate of Origin document to an HTML page.
//!
//! Usage:
//!   cargo run --example render_certificate -- <document.json> [output.html]
//!
//! Examples:
//!   cargo run --example render_certificate -- data/sample-certificate.json
//!   cargo run --example render_certificate -- data/sample-certificate.json output/certificate.html

use std::path::Path;

use coo_model::parse_document;
use coo_template::CertificateRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <document.json> [output.html]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  cargo run --example render_certificate -- data/sample-certificate.json");
        std::process::exit(1);
    }

    let document_path = &args[1];

    // Derive output path from the document name if not provided
    let output_path = if args.len() > 2 {
        args[2].clone()
    } else {
        let document_name = Path::new(document_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("certificate");
        format!("output/{}.html", document_name)
    };

    // Create output directory
    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Load and parse the document
    let document_json = std::fs::read_to_string(document_path)
        .map_err(|e| format!("Failed to read document '{}': {}", document_path, e))?;
    let document = parse_document(&document_json)?;

    // Render the certificate
    let renderer = CertificateRenderer::new()?;
    let html = renderer.render(&document)?;

    // Save output
    std::fs::write(&output_path, html)?;

    println!("Generated: {}", output_path);

    Ok(())
}
