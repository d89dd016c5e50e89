use crate::dispatcher::{MethodCallbackFn, method_dispatcher};
use crate::error::{BindError, RegistrationError};
use crate::method_binding::MethodBinding;
use crate::method_callback::MethodCallback;
use crate::method_table::{BindingHandle, MethodTable};
use uabind::constants::{APPLICATION_NAMESPACE_INDEX, DEFAULT_LOCALE, NS0_ID_HAS_COMPONENT};
use uabind::{ArgumentSpec, LocalizedText, NodeId, QualifiedName};

/// Attributes of a method node.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodAttributes {
    pub display_name: LocalizedText,
    pub description: LocalizedText,
    pub executable: bool,
    pub user_executable: bool,
}

impl MethodAttributes {
    /// Executable attributes whose display name and description are both
    /// the method name.
    pub fn executable(locale: &str, method_name: &str) -> Self {
        Self {
            display_name: LocalizedText::new(locale, method_name),
            description: LocalizedText::new(locale, method_name),
            executable: true,
            user_executable: true,
        }
    }
}

/// Everything a runtime needs to create a method node.
#[derive(Debug, Clone)]
pub struct MethodNodeRequest {
    pub parent: NodeId,
    pub reference_type: NodeId,
    pub browse_name: QualifiedName,
    pub attributes: MethodAttributes,
    pub input_arguments: Vec<ArgumentSpec>,
    pub output_argument: ArgumentSpec,
    /// Invoked by the runtime for every call of the node.
    pub callback: MethodCallbackFn,
    /// Handed back to `callback` unchanged.
    pub context: BindingHandle,
}

/// The registration side of an address-space runtime.
///
/// A runtime implements node creation and gives access to the method table
/// it owns; binding a native callback is then provided by
/// [`add_method`](Self::add_method).
pub trait AddressSpaceInterface {
    fn method_table(&self) -> &MethodTable;

    fn method_table_mut(&mut self) -> &mut MethodTable;

    /// Creates a method node, returning its id.
    fn add_method_node(&mut self, request: MethodNodeRequest) -> Result<NodeId, RegistrationError>;

    /// Locale used for the attributes of bound method nodes.
    fn locale(&self) -> &str {
        DEFAULT_LOCALE
    }

    /// Binds `callback` as a method named `method_name` under `parent`.
    ///
    /// Argument descriptors are derived from the callback's signature. An
    /// unsupported parameter or return type fails before the runtime is
    /// involved; a runtime rejection leaves no binding behind.
    fn add_method<F, Args>(
        &mut self,
        parent: &NodeId,
        method_name: &str,
        callback: F,
    ) -> Result<NodeId, BindError>
    where
        F: MethodCallback<Args>,
        Args: 'static,
        Self: Sized,
    {
        let binding = MethodBinding::new(method_name, callback).inspect_err(|err| {
            tracing::warn!(method = method_name, error = %err, "cannot bind method");
        })?;

        let input_arguments = binding.inputs().to_vec();
        let output_argument = binding.output().clone();
        let attributes = MethodAttributes::executable(self.locale(), method_name);
        let context = self.method_table_mut().insert(binding)?;

        let request = MethodNodeRequest {
            parent: parent.clone(),
            reference_type: NodeId::ns0(NS0_ID_HAS_COMPONENT),
            browse_name: QualifiedName::new(APPLICATION_NAMESPACE_INDEX, method_name),
            attributes,
            input_arguments,
            output_argument,
            callback: method_dispatcher,
            context,
        };

        match self.add_method_node(request) {
            Ok(node_id) => {
                self.method_table_mut().attach_node(context, node_id.clone());
                tracing::debug!(
                    method = method_name,
                    node_id = %node_id,
                    parent = %parent,
                    "registered method node"
                );
                Ok(node_id)
            }
            Err(err) => {
                self.method_table_mut().remove(context);
                tracing::warn!(
                    method = method_name,
                    parent = %parent,
                    error = %err,
                    "method node rejected"
                );
                Err(err.into())
            }
        }
    }
}
