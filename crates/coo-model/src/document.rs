//! Certificate document schema types
//!
//! Wire names follow the upstream UN/CEFACT-derived JSON vocabulary,
//! including its `iD` and `uRI` capitalisation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root certificate document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaftaCooDocument {
    /// Certificate number, e.g. `wfa.org.au:coo:WBC208897`
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Issue timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date_time: Option<String>,

    /// Location the certificate was issued at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_location: Option<NamedLocation>,

    /// Whether preferential tariff treatment is claimed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_preferential: Option<bool>,

    /// Exporter declaration signature (box 13)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_signatory_authentication: Option<SignatoryAuthentication>,

    /// Certifying authority signature (box 14)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_signatory_authentication: Option<SignatoryAuthentication>,

    /// The consignment this certificate covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_chain_consignment: Option<SupplyChainConsignment>,
}

/// A signature over the document, with the signing event details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatoryAuthentication {
    /// Signing timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_date_time: Option<String>,

    /// Declaration text accompanying the signature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,

    /// Signature image as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Consignment covered by the certificate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainConsignment {
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Free-text consignment information, shown in the remarks box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_country: Option<Country>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exporter: Option<Party>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_country: Option<Country>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importer: Option<Party>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_consignment_items: Vec<ConsignmentItem>,

    /// Port of loading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_baseport_location: Option<NamedLocation>,

    /// Main leg of the transport route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_carriage_transport_movement: Option<TransportMovement>,

    /// Port of discharge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unloading_baseport_location: Option<NamedLocation>,
}

/// Country reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A party to the consignment (exporter, importer, manufacturer)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Party identifier, e.g. `abr.gov.au:abn:55004094599`
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
}

/// Postal address of a party
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_sub_division_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// A named location (port, city)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedLocation {
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Main carriage transport leg
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportMovement {
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_transport_means: Option<TransportMeans>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_event: Option<DepartureEvent>,
}

/// Vessel, flight or vehicle performing the movement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportMeans {
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Departure event of the main carriage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureEvent {
    /// Departure timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date_time: Option<String>,
}

/// A top-level shipped item grouping within the consignment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsignmentItem {
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information: Option<String>,

    /// Carries the origin criterion shown in box 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_border_regulatory_procedure: Option<RegulatoryProcedure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Party>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trade_line_items: Vec<TradeLineItem>,
}

/// Regulatory procedure details for a consignment item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryProcedure {
    /// Origin criterion, e.g. `WO`, `WP`, `PSR`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_criteria_text: Option<String>,
}

/// One traded product within a consignment item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeLineItem {
    /// Item number shown in box 6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_reference: Option<InvoiceReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_product: Option<TradeProduct>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transport_packages: Vec<TransportPackage>,
}

/// Commercial invoice covering a line item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceReference {
    /// Invoice number, e.g. `tweglobal.com:invoice:1122345`
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Invoice issue timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_issue_date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_binary_file: Option<AttachedBinaryFile>,
}

/// File attached to an invoice reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedBinaryFile {
    #[serde(rename = "uRI", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Product details for a line item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeProduct {
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Goods description shown in box 8
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmonised_tariff_classification: Option<TariffClassification>,
}

/// Harmonised System classification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffClassification {
    /// Six-digit HS code shown in box 9
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_code: Option<String>,
}

/// A physical package unit belonging to a line item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportPackage {
    /// Package mark, e.g. `gs1.org:sscc:59312345670002345`
    #[serde(rename = "iD", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_volume: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<Measure>,
}

/// A measured quantity, supplied either as text ("4.5 m3") or a bare number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Text(String),
    Number(f64),
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Text(s) => f.write_str(s),
            Measure::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_upstream_field_names() {
        let json = r#"{
            "iD": "wfa.org.au:coo:WBC208897",
            "supplyChainConsignment": {
                "exporter": {
                    "iD": "abr.gov.au:abn:55004094599",
                    "name": "TREASURY WINE ESTATES VINTNERS LIMITED",
                    "postalAddress": {
                        "line1": "161 Collins Street",
                        "cityName": "MELBOURNE",
                        "countrySubDivisionName": "VIC",
                        "postcode": "3000",
                        "countryCode": "AU"
                    }
                }
            }
        }"#;

        let document: ChaftaCooDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.id.as_deref(), Some("wfa.org.au:coo:WBC208897"));

        let exporter = document
            .supply_chain_consignment
            .unwrap()
            .exporter
            .unwrap();
        assert_eq!(exporter.id.as_deref(), Some("abr.gov.au:abn:55004094599"));
        let address = exporter.postal_address.unwrap();
        assert_eq!(address.city_name.as_deref(), Some("MELBOURNE"));
        assert_eq!(address.country_sub_division_name.as_deref(), Some("VIC"));
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let json = r#"{ "supplyChainConsignment": { "includedConsignmentItems": [ {} ] } }"#;
        let document: ChaftaCooDocument = serde_json::from_str(json).unwrap();

        let items = document.supply_chain_consignment.unwrap().included_consignment_items;
        assert_eq!(items.len(), 1);
        assert!(items[0].trade_line_items.is_empty());
    }

    #[test]
    fn test_measure_accepts_text_and_number() {
        let package: TransportPackage =
            serde_json::from_str(r#"{ "grossVolume": "4.5 m3", "grossWeight": 500 }"#).unwrap();

        assert_eq!(package.gross_volume.unwrap().to_string(), "4.5 m3");
        assert_eq!(package.gross_weight.unwrap().to_string(), "500");
    }

    #[test]
    fn test_measure_fractional_number() {
        assert_eq!(Measure::Number(4.5).to_string(), "4.5");
        assert_eq!(Measure::Number(500.0).to_string(), "500");
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let document = ChaftaCooDocument {
            id: Some("coo:0001".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(json, r#"{"iD":"coo:0001"}"#);
    }
}
