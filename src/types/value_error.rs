use super::DataTypeId;
use thiserror::Error;

/// Failure to turn a [`Variant`](super::Variant) into a native value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariantDecodeError {
    #[error("expected {expected}, got a null value")]
    Null { expected: &'static str },

    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{expected} value out of range: {reason}")]
    OutOfRange {
        expected: &'static str,
        reason: String,
    },

    #[error("array element {index}: {source}")]
    Element {
        index: usize,
        source: Box<VariantDecodeError>,
    },
}

/// Failure to represent a native value in its protocol data type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VariantEncodeError {
    #[error("{value} is not representable as {data_type}")]
    OutOfRange { data_type: DataTypeId, value: String },
}

/// Raised by the scalar type lookup for native types without a scalar
/// protocol data type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{type_name}` has no scalar protocol data type")]
pub struct UnsupportedTypeError {
    pub type_name: &'static str,
}
