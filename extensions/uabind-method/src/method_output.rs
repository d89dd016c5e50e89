use crate::error::CallbackError;
use chrono::{DateTime, Utc};
use std::error::Error;
use uabind::{ByteString, UaDateTime, UaValue};

/// What a method callback may return: either a value directly, or a
/// `Result` whose error is reported as a failure status.
pub trait IntoMethodOutput {
    type Value: UaValue;

    fn into_method_output(self) -> Result<Self::Value, CallbackError>;
}

macro_rules! impl_infallible_output {
    ($($native:ty),* $(,)?) => {
        $(
            impl IntoMethodOutput for $native {
                type Value = $native;

                #[inline]
                fn into_method_output(self) -> Result<Self::Value, CallbackError> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_infallible_output!(
    bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, String, UaDateTime, ByteString, ()
);

impl IntoMethodOutput for DateTime<Utc> {
    type Value = DateTime<Utc>;

    #[inline]
    fn into_method_output(self) -> Result<Self::Value, CallbackError> {
        Ok(self)
    }
}

impl<T: UaValue> IntoMethodOutput for Vec<T> {
    type Value = Vec<T>;

    #[inline]
    fn into_method_output(self) -> Result<Self::Value, CallbackError> {
        Ok(self)
    }
}

impl<T, E> IntoMethodOutput for Result<T, E>
where
    T: UaValue,
    E: Into<Box<dyn Error + Send + Sync>>,
{
    type Value = T;

    fn into_method_output(self) -> Result<Self::Value, CallbackError> {
        self.map_err(|err| CallbackError::Failed(err.into()))
    }
}
