use crate::error::{BindError, DispatchError};
use crate::method_callback::MethodCallback;
use crate::synthesizer::{ArgumentDescriptors, synthesize};
use std::fmt;
use uabind::{ArgumentSpec, StatusCode, Variant};

type Invoker = Box<dyn Fn(&[Variant]) -> Result<Variant, DispatchError> + Send + Sync>;

/// Outcome of one dispatch, in the shape handed back to the runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult {
    pub status: StatusCode,
    /// Present only when `status` is good.
    pub output: Option<Variant>,
}

/// A native callback bound to the argument descriptors derived from its
/// signature.
///
/// The descriptors and the type-erased invoker are produced from the same
/// generic instantiation, so the shape advertised to callers and the shape
/// used to decode their inputs cannot diverge. Immutable once built.
pub struct MethodBinding {
    name: String,
    descriptors: ArgumentDescriptors,
    invoker: Invoker,
}

impl MethodBinding {
    pub fn new<F, Args>(name: impl Into<String>, callback: F) -> Result<Self, BindError>
    where
        F: MethodCallback<Args>,
        Args: 'static,
    {
        let name = name.into();
        let descriptors = synthesize::<F, Args>()?;

        tracing::debug!(
            method = %name,
            inputs = descriptors.inputs.len(),
            output = %descriptors.output.data_type,
            "synthesized method binding"
        );

        Ok(Self {
            name,
            descriptors,
            invoker: Box::new(move |inputs: &[Variant]| {
                <F as MethodCallback<Args>>::invoke(&callback, inputs)
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[ArgumentSpec] {
        &self.descriptors.inputs
    }

    pub fn output(&self) -> &ArgumentSpec {
        &self.descriptors.output
    }

    pub fn descriptors(&self) -> &ArgumentDescriptors {
        &self.descriptors
    }

    /// Decodes `inputs`, invokes the callback and encodes its result.
    pub fn dispatch(&self, inputs: &[Variant]) -> Result<Variant, DispatchError> {
        tracing::debug!(method = %self.name, inputs = inputs.len(), "dispatching method call");

        (self.invoker)(inputs).inspect_err(|err| {
            tracing::warn!(
                method = %self.name,
                status = %err.status_code(),
                error = %err,
                "method call failed"
            );
        })
    }

    /// Like [`dispatch`](Self::dispatch), with the error folded into a
    /// status code.
    pub fn invoke(&self, inputs: &[Variant]) -> InvocationResult {
        match self.dispatch(inputs) {
            Ok(output) => InvocationResult {
                status: StatusCode::Good,
                output: Some(output),
            },
            Err(err) => InvocationResult {
                status: err.status_code(),
                output: None,
            },
        }
    }
}

impl fmt::Debug for MethodBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodBinding")
            .field("name", &self.name)
            .field("descriptors", &self.descriptors)
            .finish_non_exhaustive()
    }
}
