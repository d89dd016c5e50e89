use super::{ByteString, DataTypeId, UaDateTime};

/// Untyped container for a single protocol value.
///
/// This is the representation method inputs and outputs travel in between
/// the runtime and the binding engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
    #[default]
    Empty,
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(UaDateTime),
    ByteString(ByteString),
    Array(Vec<Variant>),
}

impl Variant {
    /// The scalar data type carried, if any.
    pub fn data_type(&self) -> Option<DataTypeId> {
        match self {
            Variant::Empty | Variant::Array(_) => None,
            Variant::Boolean(_) => Some(DataTypeId::Boolean),
            Variant::SByte(_) => Some(DataTypeId::SByte),
            Variant::Byte(_) => Some(DataTypeId::Byte),
            Variant::Int16(_) => Some(DataTypeId::Int16),
            Variant::UInt16(_) => Some(DataTypeId::UInt16),
            Variant::Int32(_) => Some(DataTypeId::Int32),
            Variant::UInt32(_) => Some(DataTypeId::UInt32),
            Variant::Int64(_) => Some(DataTypeId::Int64),
            Variant::UInt64(_) => Some(DataTypeId::UInt64),
            Variant::Float(_) => Some(DataTypeId::Float),
            Variant::Double(_) => Some(DataTypeId::Double),
            Variant::String(_) => Some(DataTypeId::String),
            Variant::DateTime(_) => Some(DataTypeId::DateTime),
            Variant::ByteString(_) => Some(DataTypeId::ByteString),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Variant::Empty => "Empty",
            Variant::Array(_) => "Array",
            scalar => scalar.data_type().map_or("Empty", DataTypeId::name),
        }
    }
}

macro_rules! impl_variant_from {
    ($($native:ty => $arm:ident),* $(,)?) => {
        $(
            impl From<$native> for Variant {
                fn from(value: $native) -> Self {
                    Variant::$arm(value)
                }
            }
        )*
    };
}

impl_variant_from!(
    bool => Boolean,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    String => String,
    UaDateTime => DateTime,
    ByteString => ByteString,
);

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_owned())
    }
}
