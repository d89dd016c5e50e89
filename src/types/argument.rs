use super::{DataTypeId, LocalizedText};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Dimensionality of a value slot.
///
/// The full set of ranks the protocol defines, so an `ArgumentSpec` received
/// from elsewhere converts losslessly. Synthesized descriptors only use
/// [`ValueRank::Scalar`].
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum ValueRank {
    ScalarOrOneDimension = -3,
    Any = -2,
    Scalar = -1,
    OneOrMoreDimensions = 0,
    OneDimension = 1,
}

/// Describes one input or output slot of a method, as advertised to
/// remote callers before any call occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSpec {
    pub name: String,
    pub description: LocalizedText,
    pub data_type: DataTypeId,
    pub value_rank: ValueRank,
}

impl ArgumentSpec {
    pub fn scalar(name: impl Into<String>, description: LocalizedText, data_type: DataTypeId) -> Self {
        Self {
            name: name.into(),
            description,
            data_type,
            value_rank: ValueRank::Scalar,
        }
    }
}
