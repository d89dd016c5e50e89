use crate::error::{CallbackError, DispatchError};
use crate::method_output::IntoMethodOutput;
use std::panic::{self, AssertUnwindSafe};
use uabind::{DataTypeId, UaValue, Variant};

/// Compile-time description of one argument slot: the native type's name and
/// the protocol data type it maps to, if it has one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypeToken {
    pub type_name: &'static str,
    pub data_type: Option<DataTypeId>,
}

impl TypeToken {
    pub fn of<T: UaValue>() -> Self {
        Self {
            type_name: T::type_name(),
            data_type: T::scalar_data_type(),
        }
    }
}

/// A native function that can be bound as a method node.
///
/// Implemented for every `Fn(A0, .., An) -> R` (up to
/// [`MAX_METHOD_ARITY`](crate::MAX_METHOD_ARITY) parameters) whose parameters
/// implement [`UaValue`] and whose return type implements
/// [`IntoMethodOutput`]. `Args` is the parameter tuple; it only exists to keep
/// the per-arity implementations apart and is inferred at the call site.
pub trait MethodCallback<Args>: Send + Sync + 'static {
    /// Native type of the single output value.
    type Output: UaValue;

    /// Number of input parameters.
    const ARITY: usize;

    /// Input slots in declaration order.
    fn input_tokens() -> Vec<TypeToken>;

    fn output_token() -> TypeToken {
        TypeToken::of::<Self::Output>()
    }

    /// Decodes `inputs` positionally, invokes the function once with the
    /// complete argument list and encodes its result.
    ///
    /// The function is never invoked unless every input decoded. A panic
    /// inside the function is caught and reported as a callback failure.
    fn invoke(&self, inputs: &[Variant]) -> Result<Variant, DispatchError>;
}

macro_rules! impl_method_callback {
    ($arity:literal; $(($arg:ident, $value:ident, $position:tt)),*) => {
        impl<Func, Ret, $($arg,)*> MethodCallback<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret + Send + Sync + 'static,
            Ret: IntoMethodOutput,
            $($arg: UaValue,)*
        {
            type Output = Ret::Value;

            const ARITY: usize = $arity;

            fn input_tokens() -> Vec<TypeToken> {
                vec![$(TypeToken::of::<$arg>()),*]
            }

            fn invoke(&self, inputs: &[Variant]) -> Result<Variant, DispatchError> {
                if inputs.len() != $arity {
                    return Err(DispatchError::ArityMismatch {
                        expected: $arity,
                        actual: inputs.len(),
                    });
                }

                $(
                    let $value = <$arg as UaValue>::from_variant(&inputs[$position])
                        .map_err(|source| DispatchError::Decode {
                            position: $position,
                            source,
                        })?;
                )*

                let returned = panic::catch_unwind(AssertUnwindSafe(|| (self)($($value),*)))
                    .map_err(CallbackError::from_panic)?;

                returned
                    .into_method_output()?
                    .into_variant()
                    .map_err(DispatchError::Encode)
            }
        }
    };
}

impl_method_callback!(0;);
impl_method_callback!(1; (A0, a0, 0));
impl_method_callback!(2; (A0, a0, 0), (A1, a1, 1));
impl_method_callback!(3; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2));
impl_method_callback!(4; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3));
impl_method_callback!(5; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4));
impl_method_callback!(
    6; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5)
);
impl_method_callback!(
    7; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5),
    (A6, a6, 6)
);
impl_method_callback!(
    8; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5),
    (A6, a6, 6), (A7, a7, 7)
);
impl_method_callback!(
    9; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5),
    (A6, a6, 6), (A7, a7, 7), (A8, a8, 8)
);
impl_method_callback!(
    10; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5),
    (A6, a6, 6), (A7, a7, 7), (A8, a8, 8), (A9, a9, 9)
);
impl_method_callback!(
    11; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5),
    (A6, a6, 6), (A7, a7, 7), (A8, a8, 8), (A9, a9, 9), (A10, a10, 10)
);
impl_method_callback!(
    12; (A0, a0, 0), (A1, a1, 1), (A2, a2, 2), (A3, a3, 3), (A4, a4, 4), (A5, a5, 5),
    (A6, a6, 6), (A7, a7, 7), (A8, a8, 8), (A9, a9, 9), (A10, a10, 10), (A11, a11, 11)
);
