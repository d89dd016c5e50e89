use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// Protocol status codes produced by method binding and dispatch.
///
/// The discriminants are the wire values. Only the codes this crate family
/// actually reports are listed.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum StatusCode {
    Good = 0x0000_0000,
    BadUnexpectedError = 0x8001_0000,
    BadInternalError = 0x8002_0000,
    BadNodeIdUnknown = 0x8034_0000,
    BadOutOfRange = 0x803C_0000,
    BadParentNodeIdInvalid = 0x805B_0000,
    BadNodeIdExists = 0x805E_0000,
    BadBrowseNameDuplicated = 0x8061_0000,
    BadTypeMismatch = 0x8074_0000,
    BadMethodInvalid = 0x8075_0000,
    BadArgumentsMissing = 0x8076_0000,
    BadInvalidArgument = 0x80AB_0000,
    BadTooManyArguments = 0x80E5_0000,
    BadNotExecutable = 0x8111_0000,
}

impl StatusCode {
    #[inline]
    pub fn value(self) -> u32 {
        self.into()
    }

    /// Severity bits `00`.
    #[inline]
    pub fn is_good(self) -> bool {
        self.value() & 0xC000_0000 == 0
    }

    /// Severity bits `10`.
    #[inline]
    pub fn is_bad(self) -> bool {
        self.value() & 0x8000_0000 != 0
    }

    pub const fn name(self) -> &'static str {
        match self {
            StatusCode::Good => "Good",
            StatusCode::BadUnexpectedError => "BadUnexpectedError",
            StatusCode::BadInternalError => "BadInternalError",
            StatusCode::BadNodeIdUnknown => "BadNodeIdUnknown",
            StatusCode::BadOutOfRange => "BadOutOfRange",
            StatusCode::BadParentNodeIdInvalid => "BadParentNodeIdInvalid",
            StatusCode::BadNodeIdExists => "BadNodeIdExists",
            StatusCode::BadBrowseNameDuplicated => "BadBrowseNameDuplicated",
            StatusCode::BadTypeMismatch => "BadTypeMismatch",
            StatusCode::BadMethodInvalid => "BadMethodInvalid",
            StatusCode::BadArgumentsMissing => "BadArgumentsMissing",
            StatusCode::BadInvalidArgument => "BadInvalidArgument",
            StatusCode::BadTooManyArguments => "BadTooManyArguments",
            StatusCode::BadNotExecutable => "BadNotExecutable",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08X})", self.name(), self.value())
    }
}
