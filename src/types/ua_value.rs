use super::{
    ByteString, DataTypeId, UaDateTime, UnsupportedTypeError, Variant, VariantDecodeError,
    VariantEncodeError,
};
use chrono::{DateTime, Utc};

/// A native type that can travel inside a [`Variant`].
///
/// `scalar_data_type` is the scalar type-identifier lookup: it returns the
/// protocol data type the native type is advertised as, or `None` for types
/// that are encodable but have no scalar representation (e.g. arrays).
pub trait UaValue: Sized {
    fn scalar_data_type() -> Option<DataTypeId>;

    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    fn into_variant(self) -> Result<Variant, VariantEncodeError>;

    /// Decodes a borrowed variant. Implementations copy out what they need;
    /// the variant is never retained.
    fn from_variant(variant: &Variant) -> Result<Self, VariantDecodeError>;
}

/// Looks up the protocol data type of a native scalar type.
pub fn type_identifier_for<T: UaValue>() -> Result<DataTypeId, UnsupportedTypeError> {
    T::scalar_data_type().ok_or(UnsupportedTypeError {
        type_name: T::type_name(),
    })
}

fn unexpected(expected: DataTypeId, actual: &Variant) -> VariantDecodeError {
    match actual {
        Variant::Empty => VariantDecodeError::Null {
            expected: expected.name(),
        },
        other => VariantDecodeError::TypeMismatch {
            expected: expected.name(),
            actual: other.type_name(),
        },
    }
}

macro_rules! impl_scalar_value {
    ($($native:ty => $arm:ident),* $(,)?) => {
        $(
            impl UaValue for $native {
                fn scalar_data_type() -> Option<DataTypeId> {
                    Some(DataTypeId::$arm)
                }

                fn into_variant(self) -> Result<Variant, VariantEncodeError> {
                    Ok(Variant::$arm(self))
                }

                fn from_variant(variant: &Variant) -> Result<Self, VariantDecodeError> {
                    match variant {
                        Variant::$arm(value) => Ok(value.clone()),
                        other => Err(unexpected(DataTypeId::$arm, other)),
                    }
                }
            }
        )*
    };
}

impl_scalar_value!(
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

impl UaValue for DateTime<Utc> {
    fn scalar_data_type() -> Option<DataTypeId> {
        Some(DataTypeId::DateTime)
    }

    fn into_variant(self) -> Result<Variant, VariantEncodeError> {
        UaDateTime::try_from_utc(&self).map(Variant::DateTime)
    }

    fn from_variant(variant: &Variant) -> Result<Self, VariantDecodeError> {
        match variant {
            Variant::DateTime(value) => value.to_utc(),
            other => Err(unexpected(DataTypeId::DateTime, other)),
        }
    }
}

// Encodable, but a method returning `()` would declare zero outputs.
impl UaValue for () {
    fn scalar_data_type() -> Option<DataTypeId> {
        None
    }

    fn into_variant(self) -> Result<Variant, VariantEncodeError> {
        Ok(Variant::Empty)
    }

    fn from_variant(variant: &Variant) -> Result<Self, VariantDecodeError> {
        match variant {
            Variant::Empty => Ok(()),
            other => Err(VariantDecodeError::TypeMismatch {
                expected: "Empty",
                actual: other.type_name(),
            }),
        }
    }
}

// Arrays have a rank other than scalar.
impl<T: UaValue> UaValue for Vec<T> {
    fn scalar_data_type() -> Option<DataTypeId> {
        None
    }

    fn into_variant(self) -> Result<Variant, VariantEncodeError> {
        self.into_iter()
            .map(UaValue::into_variant)
            .collect::<Result<Vec<_>, _>>()
            .map(Variant::Array)
    }

    fn from_variant(variant: &Variant) -> Result<Self, VariantDecodeError> {
        match variant {
            Variant::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    T::from_variant(element).map_err(|source| VariantDecodeError::Element {
                        index,
                        source: Box::new(source),
                    })
                })
                .collect(),
            other => Err(VariantDecodeError::TypeMismatch {
                expected: "Array",
                actual: other.type_name(),
            }),
        }
    }
}
