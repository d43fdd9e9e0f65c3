//! The field catalog: which semantic fields exist, how important each one
//! is, and every column name we have seen stand for it.
//!
//! This is the single place new synonyms are added. The vocabulary grows
//! with every new shipper format; the matching algorithm does not.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use acm_model::{FieldDefinition, FieldId};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One row of the built-in vocabulary table.
struct StandardField {
    id: FieldId,
    priority: u32,
    required: bool,
    variants: &'static [&'static str],
}

/// Built-in vocabulary, one entry per [`FieldId`].
///
/// Variants are written in their normalized-comparable form (lowercase,
/// no diacritics); the scorer folds headers the same way, so `guia madre`
/// also covers `Guía Madre`. Spanish forms sit next to their English
/// counterparts because the same manifests arrive in both.
///
/// Priorities are all distinct: assignment order is a total order.
/// MasterWaybill outranks TrackingCode because its `NNN-NNNNNNNN` shape is
/// the most diagnostic signal in the catalog; TrackingCode outranks the
/// free-text fields because reference-style tokens say "tracking" far more
/// often than they say "description".
const STANDARD_FIELDS: &[StandardField] = &[
    StandardField {
        id: FieldId::MasterWaybill,
        priority: 110,
        required: false,
        variants: &[
            "mawb",
            "mawb no",
            "mawb number",
            "master",
            "master waybill",
            "master air waybill",
            "master awb",
            "awb",
            "awb number",
            "air waybill",
            "airway bill",
            "guia madre",
            "guia master",
            "guia aerea",
            "numero guia madre",
        ],
    },
    StandardField {
        id: FieldId::TrackingCode,
        priority: 100,
        required: true,
        variants: &[
            "tracking",
            "tracking number",
            "tracking no",
            "tracking code",
            "track no",
            "hawb",
            "hawb no",
            "house waybill",
            "house air waybill",
            "house bill",
            "guia",
            "guia hija",
            "numero de guia",
            "no de guia",
            "codigo de rastreo",
            "numero de rastreo",
            "rastreo",
            "reference",
            "reference number",
            "referencia",
            "shipment reference",
            "shipment id",
        ],
    },
    StandardField {
        id: FieldId::Identification,
        priority: 90,
        required: false,
        variants: &[
            "identification",
            "identificacion",
            "id number",
            "cedula",
            "cedula destinatario",
            "ci",
            "dni",
            "ruc",
            "documento",
            "numero documento",
            "documento identidad",
            "passport",
            "pasaporte",
            "tax id",
            "nit",
        ],
    },
    StandardField {
        id: FieldId::ConsigneeName,
        priority: 88,
        required: true,
        variants: &[
            "consignee",
            "consignee name",
            "consignatario",
            "nombre consignatario",
            "nombre del consignatario",
            "destinatario",
            "nombre destinatario",
            "receiver",
            "receiver name",
            "recipient",
            "cliente",
            "nombre cliente",
            "nombre",
            "name",
        ],
    },
    StandardField {
        id: FieldId::PhoneNumber,
        priority: 85,
        required: false,
        variants: &[
            "phone",
            "phone number",
            "telephone",
            "telefono",
            "tel",
            "telf",
            "celular",
            "cell",
            "mobile",
            "movil",
            "numero telefono",
            "contact number",
            "contacto",
        ],
    },
    StandardField {
        id: FieldId::Address,
        priority: 82,
        required: false,
        variants: &[
            "address",
            "direccion",
            "direccion destinatario",
            "direccion entrega",
            "domicilio",
            "shipping address",
            "delivery address",
            "consignee address",
            "calle",
        ],
    },
    StandardField {
        id: FieldId::DeclaredValue,
        priority: 80,
        required: true,
        variants: &[
            "declared value",
            "declared value usd",
            "value",
            "valor",
            "valor declarado",
            "valor fob",
            "fob",
            "fob value",
            "valor usd",
            "amount",
            "monto",
            "precio",
            "price",
            "customs value",
            "valor aduana",
            "invoice value",
            "valor factura",
        ],
    },
    StandardField {
        id: FieldId::Weight,
        priority: 78,
        required: true,
        variants: &[
            "weight",
            "weight kg",
            "peso",
            "peso kg",
            "gross weight",
            "peso bruto",
            "net weight",
            "peso neto",
            "kg",
            "kgs",
            "wt",
            "libras",
            "lbs",
            "pounds",
        ],
    },
    StandardField {
        id: FieldId::Volume,
        priority: 76,
        required: false,
        variants: &[
            "volume",
            "volumen",
            "vol",
            "cbm",
            "m3",
            "cubic meters",
            "volumetric weight",
            "peso volumetrico",
        ],
    },
    StandardField {
        id: FieldId::Description,
        priority: 75,
        required: true,
        variants: &[
            "description",
            "descripcion",
            "descripcion contenido",
            "description of goods",
            "goods description",
            "contents",
            "contenido",
            "detalle",
            "detalle contenido",
            "mercancia",
            "producto",
            "item description",
            "commodity",
            "articulo",
        ],
    },
    StandardField {
        id: FieldId::OriginCountry,
        priority: 70,
        required: false,
        variants: &[
            "origin",
            "origin country",
            "country of origin",
            "pais",
            "pais origen",
            "pais de origen",
            "procedencia",
            "origen",
        ],
    },
    StandardField {
        id: FieldId::Province,
        priority: 65,
        required: false,
        variants: &[
            "province",
            "provincia",
            "state",
            "estado",
            "region",
            "departamento",
        ],
    },
    StandardField {
        id: FieldId::City,
        priority: 60,
        required: false,
        variants: &["city", "ciudad", "town", "localidad", "municipio"],
    },
    StandardField {
        id: FieldId::District,
        priority: 55,
        required: false,
        variants: &[
            "district",
            "distrito",
            "parroquia",
            "canton",
            "sector",
            "barrio",
            "zona",
        ],
    },
];

static STANDARD_CATALOG: LazyLock<FieldCatalog> = LazyLock::new(|| {
    let fields = STANDARD_FIELDS
        .iter()
        .map(|entry| {
            FieldDefinition::new(
                entry.id,
                entry.priority,
                entry.required,
                entry.variants.iter().map(|v| (*v).to_string()).collect(),
            )
        })
        .collect();
    // The built-in table is covered by tests; only custom catalogs go
    // through the validating constructor.
    FieldCatalog { fields }
});

/// An immutable set of target fields with their matching vocabulary.
///
/// The inference engine is parameterized by a catalog, so callers with a
/// narrower or experimental field set build their own via [`FieldCatalog::new`];
/// everyone else uses [`FieldCatalog::standard`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCatalog {
    fields: Vec<FieldDefinition>,
}

impl FieldCatalog {
    /// Validating constructor for custom field sets.
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self, CatalogError> {
        if fields.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let mut seen = BTreeSet::new();
        for definition in &fields {
            if !seen.insert(definition.id) {
                return Err(CatalogError::DuplicateField(definition.id));
            }
            if definition.variants.is_empty() {
                return Err(CatalogError::NoVariants(definition.id));
            }
            if definition.variants.iter().any(|v| v.trim().is_empty()) {
                return Err(CatalogError::BlankVariant(definition.id));
            }
        }
        Ok(Self { fields })
    }

    /// The built-in bilingual catalog, loaded once per process.
    pub fn standard() -> &'static FieldCatalog {
        &STANDARD_CATALOG
    }

    /// Definitions in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Definitions ordered by priority, highest first. The sort is stable,
    /// so equal priorities keep declaration order.
    pub fn by_priority(&self) -> Vec<&FieldDefinition> {
        let mut ordered: Vec<&FieldDefinition> = self.fields.iter().collect();
        ordered.sort_by_key(|definition| std::cmp::Reverse(definition.priority));
        ordered
    }

    /// Definition for one field, if present in this catalog.
    pub fn definition(&self, field: FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|definition| definition.id == field)
    }

    /// Known name variants for one field.
    pub fn variants_for(&self, field: FieldId) -> Option<&[String]> {
        self.definition(field)
            .map(|definition| definition.variants.as_slice())
    }

    /// Fields a mapping must cover to be complete.
    pub fn required_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields
            .iter()
            .filter(|definition| definition.required)
            .map(|definition| definition.id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
