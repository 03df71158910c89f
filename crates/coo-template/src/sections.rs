//! Section view models
//!
//! Each numbered box of the printed form gets a small display struct,
//! built defensively from the document: absent fields become blanks,
//! never errors. The views carry plain strings only; layout lives in
//! the HTML template.

use coo_model::{ChaftaCooDocument, NamedLocation, Party, PostalAddress, SignatoryAuthentication};
use coo_text::{format_calendar_date, reference_suffix};
use serde::Serialize;

use crate::flatten::{flatten_line_items, LineItemRow};
use crate::Result;

/// Complete view of one certificate, bound to the HTML template
#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificateView {
    /// Certificate number shown in the summary box
    pub certificate_number: String,

    /// Box 1 - exporter's name, address and country
    pub exporter: PartyView,

    /// Box 2 - producer's name and address (if known)
    pub producer: PartyView,

    /// Box 3 - importer's name, address and country (if known)
    pub importer: PartyView,

    /// Box 4 - means of transport and route (as far as known)
    pub transport: TransportView,

    /// Box 5 - remarks
    pub remarks: Vec<String>,

    /// Boxes 6-12 - the goods table
    pub line_items: Vec<LineItemRow>,

    /// Box 13 - declaration by the exporter
    pub declaration: DeclarationView,

    /// Box 14 - certification
    pub certification: CertificationView,

    /// Pretty-printed source document, appended below the form
    pub document_json: String,
}

/// Display model for a party box
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartyView {
    pub name: String,
    pub address_lines: Vec<String>,
    /// Registration number (ABN for the exporter); blank when unknown
    pub identifier: String,
}

/// Box 4 - means of transport and route
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransportView {
    pub departure_date: String,
    /// Vessel/flight/vehicle identifier
    pub transport_means: String,
    pub loading_port: String,
    pub discharge_port: String,
}

/// Box 13 - declaration by the exporter
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeclarationView {
    /// Destination country printed inside the fixed declaration text
    pub import_country: String,
    pub statement: String,
    /// Signature image as a data URI; blank renders an empty signing area
    pub signature: String,
    pub signed_on: String,
}

/// Box 14 - certification
#[derive(Debug, Clone, Default, Serialize)]
pub struct CertificationView {
    pub signature: String,
    pub signed_on: String,
    pub place: String,
}

impl CertificateView {
    /// Build the full form view from a parsed document.
    pub fn from_document(document: &ChaftaCooDocument) -> Result<Self> {
        let consignment = document.supply_chain_consignment.as_ref();
        let items = consignment
            .map(|c| c.included_consignment_items.as_slice())
            .unwrap_or(&[]);

        // The producer box shows the first consignment item's manufacturer.
        let producer = items.first().and_then(|item| item.manufacturer.as_ref());

        let mut remarks = Vec::new();
        if let Some(information) = consignment.and_then(|c| c.information.as_deref()) {
            remarks.push(information.to_string());
        }
        for item in items {
            if let Some(information) = &item.information {
                remarks.push(information.clone());
            }
        }

        Ok(Self {
            certificate_number: document.id.clone().unwrap_or_default(),
            exporter: party_view(consignment.and_then(|c| c.exporter.as_ref())),
            producer: party_view(producer),
            importer: party_view(consignment.and_then(|c| c.importer.as_ref())),
            transport: transport_view(document),
            remarks,
            line_items: flatten_line_items(items),
            declaration: declaration_view(document),
            certification: certification_view(document),
            document_json: serde_json::to_string_pretty(document)?,
        })
    }
}

fn party_view(party: Option<&Party>) -> PartyView {
    let Some(party) = party else {
        return PartyView::default();
    };

    PartyView {
        name: party.name.clone().unwrap_or_default(),
        address_lines: address_lines(party.postal_address.as_ref()),
        identifier: party.id.clone().unwrap_or_default(),
    }
}

/// Lay an address out the way the printed form does:
/// `line1[, line2], cityName,` then `subdivision postcode country`.
fn address_lines(address: Option<&PostalAddress>) -> Vec<String> {
    let Some(address) = address else {
        return Vec::new();
    };

    let mut lines = Vec::new();

    let street: Vec<&str> = [
        address.line1.as_deref(),
        address.line2.as_deref(),
        address.city_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();
    if !street.is_empty() {
        lines.push(format!("{},", street.join(", ")));
    }

    let region: Vec<&str> = [
        address.country_sub_division_name.as_deref(),
        address.postcode.as_deref(),
        address.country_code.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();
    if !region.is_empty() {
        lines.push(region.join(" "));
    }

    lines
}

fn transport_view(document: &ChaftaCooDocument) -> TransportView {
    let consignment = document.supply_chain_consignment.as_ref();
    let movement = consignment.and_then(|c| c.main_carriage_transport_movement.as_ref());

    let departure_date = movement
        .and_then(|m| m.departure_event.as_ref())
        .and_then(|e| e.departure_date_time.as_deref())
        .and_then(format_calendar_date)
        .unwrap_or_default();

    let transport_means = movement
        .and_then(|m| m.used_transport_means.as_ref())
        .and_then(|means| means.id.as_deref().or(means.name.as_deref()))
        .map(|value| reference_suffix(value).to_string())
        .unwrap_or_default();

    TransportView {
        departure_date,
        transport_means,
        loading_port: location_name(consignment.and_then(|c| c.loading_baseport_location.as_ref())),
        discharge_port: location_name(
            consignment.and_then(|c| c.unloading_baseport_location.as_ref()),
        ),
    }
}

fn location_name(location: Option<&NamedLocation>) -> String {
    location
        .and_then(|l| l.name.as_deref().or(l.id.as_deref().map(reference_suffix)))
        .unwrap_or_default()
        .to_string()
}

fn declaration_view(document: &ChaftaCooDocument) -> DeclarationView {
    let signatory = document.first_signatory_authentication.as_ref();

    DeclarationView {
        import_country: document
            .supply_chain_consignment
            .as_ref()
            .and_then(|c| c.import_country.as_ref())
            .and_then(|country| country.code.clone())
            .unwrap_or_default(),
        statement: signatory
            .and_then(|s| s.statement.clone())
            .unwrap_or_default(),
        signature: signatory
            .and_then(|s| s.signature.clone())
            .unwrap_or_default(),
        signed_on: signing_date(signatory),
    }
}

fn certification_view(document: &ChaftaCooDocument) -> CertificationView {
    let signatory = document.second_signatory_authentication.as_ref();

    // Certification falls back to the document issue date when the
    // signing event carries none.
    let mut signed_on = signing_date(signatory);
    if signed_on.is_empty() {
        signed_on = document
            .issue_date_time
            .as_deref()
            .and_then(format_calendar_date)
            .unwrap_or_default();
    }

    CertificationView {
        signature: signatory
            .and_then(|s| s.signature.clone())
            .unwrap_or_default(),
        signed_on,
        place: location_name(document.issue_location.as_ref()),
    }
}

fn signing_date(signatory: Option<&SignatoryAuthentication>) -> String {
    signatory
        .and_then(|s| s.actual_date_time.as_deref())
        .and_then(format_calendar_date)
        .unwrap_or_default()
}
