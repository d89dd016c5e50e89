use super::NodeId;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Built-in scalar data types a method argument can be advertised as.
///
/// The discriminants are the numeric identifiers of the corresponding
/// data type nodes in namespace 0.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum DataTypeId {
    Boolean = 1,
    SByte = 2,
    Byte = 3,
    Int16 = 4,
    UInt16 = 5,
    Int32 = 6,
    UInt32 = 7,
    Int64 = 8,
    UInt64 = 9,
    Float = 10,
    Double = 11,
    String = 12,
    DateTime = 13,
    ByteString = 15,
}

const ALL_DATA_TYPES: [DataTypeId; 14] = [
    DataTypeId::Boolean,
    DataTypeId::SByte,
    DataTypeId::Byte,
    DataTypeId::Int16,
    DataTypeId::UInt16,
    DataTypeId::Int32,
    DataTypeId::UInt32,
    DataTypeId::Int64,
    DataTypeId::UInt64,
    DataTypeId::Float,
    DataTypeId::Double,
    DataTypeId::String,
    DataTypeId::DateTime,
    DataTypeId::ByteString,
];

static DATA_TYPES_BY_NAME: Lazy<HashMap<&'static str, DataTypeId>> = Lazy::new(|| {
    ALL_DATA_TYPES
        .iter()
        .map(|data_type| (data_type.name(), *data_type))
        .collect()
});

impl DataTypeId {
    /// Browse name of the data type node.
    pub const fn name(self) -> &'static str {
        match self {
            DataTypeId::Boolean => "Boolean",
            DataTypeId::SByte => "SByte",
            DataTypeId::Byte => "Byte",
            DataTypeId::Int16 => "Int16",
            DataTypeId::UInt16 => "UInt16",
            DataTypeId::Int32 => "Int32",
            DataTypeId::UInt32 => "UInt32",
            DataTypeId::Int64 => "Int64",
            DataTypeId::UInt64 => "UInt64",
            DataTypeId::Float => "Float",
            DataTypeId::Double => "Double",
            DataTypeId::String => "String",
            DataTypeId::DateTime => "DateTime",
            DataTypeId::ByteString => "ByteString",
        }
    }

    #[inline]
    pub fn value(self) -> u32 {
        self.into()
    }

    /// The namespace 0 node describing this data type.
    pub fn node_id(self) -> NodeId {
        NodeId::ns0(self.value())
    }

    pub fn all() -> &'static [DataTypeId] {
        &ALL_DATA_TYPES
    }
}

impl fmt::Display for DataTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataTypeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DATA_TYPES_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| format!("unknown data type name `{}`", s))
    }
}
