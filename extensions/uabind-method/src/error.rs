use std::any::Any;
use std::error::Error;
use std::fmt;
use thiserror::Error;
use uabind::{StatusCode, VariantDecodeError, VariantEncodeError};

/// Identifies one argument slot of a method signature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentSlot {
    /// Input parameter at the given 0-based position.
    Input(usize),
    /// The single return slot.
    Output,
}

impl fmt::Display for ArgumentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentSlot::Input(position) => write!(f, "input argument {}", position),
            ArgumentSlot::Output => f.write_str("return value"),
        }
    }
}

/// The runtime refused to create a node.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{status}: {message}")]
pub struct RegistrationError {
    pub status: StatusCode,
    pub message: String,
}

impl RegistrationError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Bind-time failures. Nothing is registered when either occurs.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("unsupported type `{type_name}` in {slot}")]
    UnsupportedType {
        slot: ArgumentSlot,
        type_name: &'static str,
    },

    #[error("method node registration failed: {0}")]
    Registration(#[from] RegistrationError),
}

/// A domain-level failure a method callback can return to pick the status
/// code reported to the caller.
///
/// Any other error type returned by a callback is reported as
/// `BadUnexpectedError`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{status}: {message}")]
pub struct MethodFault {
    pub status: StatusCode,
    pub message: String,
}

impl MethodFault {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// A method callback did not produce a value.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("method callback failed: {0}")]
    Failed(Box<dyn Error + Send + Sync>),

    #[error("method callback panicked: {0}")]
    Panicked(String),
}

impl CallbackError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CallbackError::Failed(err) => err
                .downcast_ref::<MethodFault>()
                .map_or(StatusCode::BadUnexpectedError, |fault| fault.status),
            CallbackError::Panicked(_) => StatusCode::BadInternalError,
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => "non-string panic payload".to_owned(),
            },
        };
        CallbackError::Panicked(message)
    }
}

/// Call-time failures.
///
/// None of these ever reaches the runtime as anything but a status code.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("expected {expected} input arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("cannot decode input argument {position}: {source}")]
    Decode {
        position: usize,
        source: VariantDecodeError,
    },

    #[error(transparent)]
    Callback(#[from] CallbackError),

    #[error("cannot encode return value: {0}")]
    Encode(#[source] VariantEncodeError),

    #[error("expected {expected} output slots, got {actual}")]
    OutputSlots { expected: usize, actual: usize },

    #[error("no method binding for the registered context")]
    StaleBinding,
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::ArityMismatch { expected, actual } if actual < expected => {
                StatusCode::BadArgumentsMissing
            }
            DispatchError::ArityMismatch { .. } => StatusCode::BadTooManyArguments,
            DispatchError::Decode {
                source: VariantDecodeError::TypeMismatch { .. },
                ..
            } => StatusCode::BadTypeMismatch,
            DispatchError::Decode { .. } => StatusCode::BadInvalidArgument,
            DispatchError::Callback(err) => err.status_code(),
            DispatchError::Encode(_) => StatusCode::BadOutOfRange,
            DispatchError::OutputSlots { .. } | DispatchError::StaleBinding => {
                StatusCode::BadInternalError
            }
        }
    }
}
