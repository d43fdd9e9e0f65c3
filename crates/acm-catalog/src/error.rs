use acm_model::FieldId;
use thiserror::Error;

/// Errors from building a field catalog.
///
/// These are programming/configuration errors: the standard catalog never
/// trips them, and inference itself has no error path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no field definitions")]
    EmptyCatalog,
    #[error("field {0} defined more than once")]
    DuplicateField(FieldId),
    #[error("field {0} has no name variants")]
    NoVariants(FieldId),
    #[error("field {0} has a blank name variant")]
    BlankVariant(FieldId),
}
