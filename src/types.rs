mod argument;
mod byte_string;
mod data_type_id;
mod date_time;
mod localized_text;
mod node_id;
mod qualified_name;
mod status_code;
mod ua_value;
mod value_error;
mod variant;

pub use argument::{ArgumentSpec, ValueRank};
pub use byte_string::ByteString;
pub use data_type_id::DataTypeId;
pub use date_time::UaDateTime;
pub use localized_text::LocalizedText;
pub use node_id::{Identifier, NodeId};
pub use qualified_name::QualifiedName;
pub use status_code::StatusCode;
pub use ua_value::{UaValue, type_identifier_for};
pub use value_error::{UnsupportedTypeError, VariantDecodeError, VariantEncodeError};
pub use variant::Variant;
