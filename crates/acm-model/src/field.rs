use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic target fields a manifest column can map onto.
///
/// The enumeration is closed: extending the engine's vocabulary means adding
/// a catalog entry for an existing field or adding a new variant here plus
/// its catalog entry. The matching algorithm never changes per field.
///
/// Declaration order is the deterministic tie-break for equal catalog
/// priorities, so new variants go at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldId {
    /// House waybill / courier tracking identifier (HAWB).
    TrackingCode,
    /// Master air waybill (MAWB): 3-digit IATA prefix + 8-digit serial.
    MasterWaybill,
    /// Consignee (receiver) full name.
    ConsigneeName,
    /// Consignee identification document (cedula, RUC, passport, ...).
    Identification,
    /// Consignee contact phone.
    PhoneNumber,
    /// Delivery address.
    Address,
    /// Free-text description of goods.
    Description,
    /// Declared customs value.
    DeclaredValue,
    /// Gross weight.
    Weight,
    /// Volume / volumetric weight.
    Volume,
    /// Country the shipment originates from.
    OriginCountry,
    /// Destination province / state.
    Province,
    /// Destination city.
    City,
    /// Destination district / parish.
    District,
}

impl FieldId {
    /// Every field, in declaration order.
    pub const ALL: [FieldId; 14] = [
        FieldId::TrackingCode,
        FieldId::MasterWaybill,
        FieldId::ConsigneeName,
        FieldId::Identification,
        FieldId::PhoneNumber,
        FieldId::Address,
        FieldId::Description,
        FieldId::DeclaredValue,
        FieldId::Weight,
        FieldId::Volume,
        FieldId::OriginCountry,
        FieldId::Province,
        FieldId::City,
        FieldId::District,
    ];

    /// Stable machine-readable name, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::TrackingCode => "TRACKING_CODE",
            FieldId::MasterWaybill => "MASTER_WAYBILL",
            FieldId::ConsigneeName => "CONSIGNEE_NAME",
            FieldId::Identification => "IDENTIFICATION",
            FieldId::PhoneNumber => "PHONE_NUMBER",
            FieldId::Address => "ADDRESS",
            FieldId::Description => "DESCRIPTION",
            FieldId::DeclaredValue => "DECLARED_VALUE",
            FieldId::Weight => "WEIGHT",
            FieldId::Volume => "VOLUME",
            FieldId::OriginCountry => "ORIGIN_COUNTRY",
            FieldId::Province => "PROVINCE",
            FieldId::City => "CITY",
            FieldId::District => "DISTRICT",
        }
    }

    /// Human-readable label for reports and UI surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::TrackingCode => "Tracking code",
            FieldId::MasterWaybill => "Master waybill",
            FieldId::ConsigneeName => "Consignee name",
            FieldId::Identification => "Identification number",
            FieldId::PhoneNumber => "Phone number",
            FieldId::Address => "Address",
            FieldId::Description => "Description",
            FieldId::DeclaredValue => "Declared value",
            FieldId::Weight => "Weight",
            FieldId::Volume => "Volume",
            FieldId::OriginCountry => "Origin country",
            FieldId::Province => "Province",
            FieldId::City => "City",
            FieldId::District => "District",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = String;

    /// Parse a machine-readable field name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        FieldId::ALL
            .iter()
            .find(|field| field.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}

/// A target field together with its matching vocabulary.
///
/// `priority` controls assignment order: higher-priority fields claim
/// ambiguous headers first. Within one catalog, equal priorities fall back
/// to declaration order, deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub priority: u32,
    /// Whether a mapping without this field should be flagged downstream.
    pub required: bool,
    /// Known name variants: synonyms, abbreviations, bilingual forms.
    /// Compared through the normalizer, so diacritics and separators are
    /// irrelevant here.
    pub variants: Vec<String>,
}

impl FieldDefinition {
    pub fn new(id: FieldId, priority: u32, required: bool, variants: Vec<String>) -> Self {
        Self {
            id,
            priority,
            required,
            variants,
        }
    }
}
