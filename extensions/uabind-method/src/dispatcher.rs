use crate::constants::METHOD_OUTPUT_COUNT;
use crate::error::DispatchError;
use crate::method_table::{BindingHandle, MethodTable};
use uabind::{NodeId, StatusCode, Variant};

/// Identity of one incoming method call, as supplied by the runtime.
#[derive(Debug, Clone, Copy)]
pub struct MethodCall<'a> {
    /// Ignored by the dispatcher; carried for runtimes that log or audit.
    pub session_id: &'a NodeId,
    pub method_id: &'a NodeId,
    pub object_id: &'a NodeId,
    /// The context the method node was registered with.
    pub context: BindingHandle,
}

/// Signature of the callback a runtime invokes for a method node.
///
/// The runtime passes the method table it owns, the call identity, the
/// input values and a pre-sized output array, and receives a status code.
pub type MethodCallbackFn = fn(
    methods: &MethodTable,
    call: &MethodCall<'_>,
    input: &[Variant],
    output: &mut [Variant],
) -> StatusCode;

/// Resolves the binding for `context` and dispatches `input` to it.
pub fn dispatch(
    methods: &MethodTable,
    context: BindingHandle,
    input: &[Variant],
) -> Result<Variant, DispatchError> {
    let Some(binding) = methods.get(context) else {
        tracing::warn!(context = context.index(), "no method binding for context");
        return Err(DispatchError::StaleBinding);
    };
    binding.dispatch(input)
}

/// The invocation callback registered for every bound method node.
///
/// On success `output[0]` holds the encoded return value. On any failure all
/// output slots are left empty and only the status code carries the outcome.
pub fn method_dispatcher(
    methods: &MethodTable,
    call: &MethodCall<'_>,
    input: &[Variant],
    output: &mut [Variant],
) -> StatusCode {
    output.fill(Variant::Empty);

    if output.len() != METHOD_OUTPUT_COUNT {
        tracing::warn!(
            method_id = %call.method_id,
            slots = output.len(),
            "runtime supplied a wrong number of output slots"
        );
        return DispatchError::OutputSlots {
            expected: METHOD_OUTPUT_COUNT,
            actual: output.len(),
        }
        .status_code();
    }

    match dispatch(methods, call.context, input) {
        Ok(value) => {
            output[0] = value;
            StatusCode::Good
        }
        Err(err) => err.status_code(),
    }
}
