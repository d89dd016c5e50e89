use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use uabind::{ArgumentSpec, LocalizedText, NodeId, QualifiedName};
use uabind_method::{BindingHandle, MethodCallbackFn};

#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum NodeClass {
    Object = 1,
    Method = 4,
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeClass::Object => f.write_str("Object"),
            NodeClass::Method => f.write_str("Method"),
        }
    }
}

/// The method-specific part of a method node.
///
/// The argument descriptors are fixed at registration and always match what
/// the bound callback decodes; only the executable flags can change.
///
/// ```compile_fail
/// # fn rewrite(method: &mut uabind_server::MethodNode) {
/// method.input_arguments.clear();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MethodNode {
    input_arguments: Vec<ArgumentSpec>,
    output_argument: ArgumentSpec,
    executable: bool,
    user_executable: bool,
    callback: MethodCallbackFn,
    context: BindingHandle,
}

impl MethodNode {
    pub(crate) fn new(
        input_arguments: Vec<ArgumentSpec>,
        output_argument: ArgumentSpec,
        executable: bool,
        user_executable: bool,
        callback: MethodCallbackFn,
        context: BindingHandle,
    ) -> Self {
        Self {
            input_arguments,
            output_argument,
            executable,
            user_executable,
            callback,
            context,
        }
    }

    pub fn input_arguments(&self) -> &[ArgumentSpec] {
        &self.input_arguments
    }

    pub fn output_argument(&self) -> &ArgumentSpec {
        &self.output_argument
    }

    pub fn executable(&self) -> bool {
        self.executable
    }

    pub fn set_executable(&mut self, executable: bool) {
        self.executable = executable;
    }

    pub fn user_executable(&self) -> bool {
        self.user_executable
    }

    pub fn set_user_executable(&mut self, user_executable: bool) {
        self.user_executable = user_executable;
    }

    /// Both executable flags are set.
    pub fn is_callable(&self) -> bool {
        self.executable && self.user_executable
    }

    pub fn callback(&self) -> MethodCallbackFn {
        self.callback
    }

    pub fn context(&self) -> BindingHandle {
        self.context
    }
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Object { type_definition: NodeId },
    Method(MethodNode),
}

/// A node stored in the address space.
///
/// Node id and node class are fixed once the node exists; the remaining
/// attributes can be changed through [`InMemoryAddressSpace::node_mut`](crate::InMemoryAddressSpace::node_mut).
#[derive(Debug, Clone)]
pub struct UaNode {
    node_id: NodeId,
    browse_name: QualifiedName,
    display_name: LocalizedText,
    description: LocalizedText,
    write_mask: u32,
    parent: Option<NodeId>,
    reference_type: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

impl UaNode {
    pub(crate) fn new(
        node_id: NodeId,
        browse_name: QualifiedName,
        display_name: LocalizedText,
        kind: NodeKind,
    ) -> Self {
        Self {
            node_id,
            browse_name,
            description: LocalizedText::new(display_name.locale.clone(), ""),
            display_name,
            write_mask: 0,
            parent: None,
            reference_type: None,
            children: Vec::new(),
            kind,
        }
    }

    pub(crate) fn with_description(mut self, description: LocalizedText) -> Self {
        self.description = description;
        self
    }

    pub(crate) fn attach_to(&mut self, parent: NodeId, reference_type: NodeId) {
        self.parent = Some(parent);
        self.reference_type = Some(reference_type);
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn node_class(&self) -> NodeClass {
        match self.kind {
            NodeKind::Object { .. } => NodeClass::Object,
            NodeKind::Method(_) => NodeClass::Method,
        }
    }

    pub fn browse_name(&self) -> &QualifiedName {
        &self.browse_name
    }

    pub fn set_browse_name(&mut self, browse_name: QualifiedName) {
        self.browse_name = browse_name;
    }

    pub fn display_name(&self) -> &LocalizedText {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: LocalizedText) {
        self.display_name = display_name;
    }

    pub fn description(&self) -> &LocalizedText {
        &self.description
    }

    pub fn set_description(&mut self, description: LocalizedText) {
        self.description = description;
    }

    pub fn write_mask(&self) -> u32 {
        self.write_mask
    }

    pub fn set_write_mask(&mut self, write_mask: u32) {
        self.write_mask = write_mask;
    }

    /// The node this one hangs off, `None` for the Objects folder.
    pub fn parent_id(&self) -> Option<&NodeId> {
        self.parent.as_ref()
    }

    /// Reference type linking the parent to this node.
    pub fn reference_type(&self) -> Option<&NodeId> {
        self.reference_type.as_ref()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn type_definition(&self) -> Option<&NodeId> {
        match &self.kind {
            NodeKind::Object { type_definition } => Some(type_definition),
            NodeKind::Method(_) => None,
        }
    }

    pub fn method(&self) -> Option<&MethodNode> {
        match &self.kind {
            NodeKind::Method(method) => Some(method),
            NodeKind::Object { .. } => None,
        }
    }

    pub fn method_mut(&mut self) -> Option<&mut MethodNode> {
        match &mut self.kind {
            NodeKind::Method(method) => Some(method),
            NodeKind::Object { .. } => None,
        }
    }
}
