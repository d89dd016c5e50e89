use crate::call::{CallMethodRequest, CallMethodResult};
use crate::config::ServerConfig;
use crate::constants::OBJECTS_FOLDER_BROWSE_NAME;
use crate::error::ServerError;
use crate::node::{MethodNode, NodeKind, UaNode};
use std::collections::HashMap;
use uabind::constants::{
    APPLICATION_NAMESPACE_INDEX, NS0_ID_BASE_OBJECT_TYPE, NS0_ID_FOLDER_TYPE, NS0_ID_HAS_COMPONENT,
    NS0_ID_OBJECTS_FOLDER, NS0_ID_ORGANIZES, NS0_INDEX,
};
use uabind::{LocalizedText, NodeId, QualifiedName, StatusCode, Variant};
use uabind_method::error::RegistrationError;
use uabind_method::{
    AddressSpaceInterface, METHOD_OUTPUT_COUNT, MethodCall, MethodNodeRequest, MethodTable,
};

/// An address space held entirely in memory.
///
/// Starts out with the standard Objects folder. Owns the method table of
/// every method node bound into it, so a method binding lives exactly as
/// long as its node.
#[derive(Debug)]
pub struct InMemoryAddressSpace {
    nodes: HashMap<NodeId, UaNode>,
    methods: MethodTable,
    locale: String,
    /// `None` once the numeric identifier space is used up.
    next_node_id: Option<u32>,
}

impl Default for InMemoryAddressSpace {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}

impl InMemoryAddressSpace {
    pub fn new(config: &ServerConfig) -> Self {
        let objects_folder = UaNode::new(
            Self::objects_folder_id(),
            QualifiedName::new(NS0_INDEX, OBJECTS_FOLDER_BROWSE_NAME),
            LocalizedText::new(config.locale.as_str(), OBJECTS_FOLDER_BROWSE_NAME),
            NodeKind::Object {
                type_definition: NodeId::ns0(NS0_ID_FOLDER_TYPE),
            },
        );

        let mut nodes = HashMap::new();
        nodes.insert(Self::objects_folder_id(), objects_folder);

        Self {
            nodes,
            methods: MethodTable::new(),
            locale: config.locale.clone(),
            next_node_id: Some(config.first_node_id),
        }
    }

    pub fn objects_folder_id() -> NodeId {
        NodeId::ns0(NS0_ID_OBJECTS_FOLDER)
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&UaNode> {
        self.nodes.get(node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut UaNode> {
        self.nodes.get_mut(node_id)
    }

    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Number of nodes, including the Objects folder.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the child of `parent` with the given browse name.
    pub fn find_child(&self, parent: &NodeId, browse_name: &QualifiedName) -> Option<&UaNode> {
        self.nodes
            .get(parent)?
            .children()
            .iter()
            .filter_map(|child| self.nodes.get(child))
            .find(|child| child.browse_name() == browse_name)
    }

    /// Creates a `BaseObjectType` instance under `parent`.
    pub fn add_object(
        &mut self,
        parent: &NodeId,
        browse_name: &str,
    ) -> Result<NodeId, RegistrationError> {
        self.add_object_of_type(
            parent,
            browse_name,
            NodeId::ns0(NS0_ID_BASE_OBJECT_TYPE),
            NodeId::ns0(NS0_ID_HAS_COMPONENT),
        )
    }

    /// Creates a `FolderType` instance under `parent`.
    pub fn add_folder(
        &mut self,
        parent: &NodeId,
        browse_name: &str,
    ) -> Result<NodeId, RegistrationError> {
        self.add_object_of_type(
            parent,
            browse_name,
            NodeId::ns0(NS0_ID_FOLDER_TYPE),
            NodeId::ns0(NS0_ID_ORGANIZES),
        )
    }

    fn add_object_of_type(
        &mut self,
        parent: &NodeId,
        browse_name: &str,
        type_definition: NodeId,
        reference_type: NodeId,
    ) -> Result<NodeId, RegistrationError> {
        let browse_name = QualifiedName::new(APPLICATION_NAMESPACE_INDEX, browse_name);
        self.validate_parent(parent, &browse_name)?;

        let node_id = self.next_node_id()?;
        let display_name = LocalizedText::new(self.locale.as_str(), browse_name.name.as_str());
        let node = UaNode::new(
            node_id.clone(),
            browse_name,
            display_name,
            NodeKind::Object { type_definition },
        );
        self.insert_child(parent, reference_type, node);

        tracing::debug!(node_id = %node_id, parent = %parent, "added object node");
        Ok(node_id)
    }

    /// Deletes `node_id` and everything below it. Bindings of deleted method
    /// nodes are dropped with them.
    pub fn delete_node(&mut self, node_id: &NodeId) -> Result<(), ServerError> {
        if node_id.namespace == NS0_INDEX {
            return Err(ServerError::ProtectedNode(node_id.clone()));
        }
        let Some(node) = self.nodes.get(node_id) else {
            return Err(ServerError::NodeNotFound(node_id.clone()));
        };

        if let Some(parent) = node.parent_id().cloned() {
            if let Some(parent) = self.nodes.get_mut(&parent) {
                parent.children_mut().retain(|child| child != node_id);
            }
        }

        let mut pending = vec![node_id.clone()];
        while let Some(current) = pending.pop() {
            let Some(node) = self.nodes.remove(&current) else {
                continue;
            };
            if let Some(method) = node.method() {
                self.methods.remove(method.context());
            }
            pending.extend(node.children().iter().cloned());
        }

        tracing::debug!(node_id = %node_id, "deleted node");
        Ok(())
    }

    /// Invokes a method node on behalf of `session_id`.
    ///
    /// The method must exist, be a component of `request.object_id` and be
    /// executable; only then is the registered callback run.
    pub fn call(&self, session_id: &NodeId, request: &CallMethodRequest) -> CallMethodResult {
        let Some(method_node) = self.nodes.get(&request.method_id) else {
            return CallMethodResult::failed(StatusCode::BadMethodInvalid);
        };
        let Some(method) = method_node.method() else {
            return CallMethodResult::failed(StatusCode::BadMethodInvalid);
        };
        if !self.nodes.contains_key(&request.object_id) {
            return CallMethodResult::failed(StatusCode::BadNodeIdUnknown);
        }
        if method_node.parent_id() != Some(&request.object_id) {
            return CallMethodResult::failed(StatusCode::BadMethodInvalid);
        }
        if !method.is_callable() {
            return CallMethodResult::failed(StatusCode::BadNotExecutable);
        }

        let call = MethodCall {
            session_id,
            method_id: &request.method_id,
            object_id: &request.object_id,
            context: method.context(),
        };
        let mut output_arguments = vec![Variant::Empty; METHOD_OUTPUT_COUNT];
        let status = (method.callback())(
            &self.methods,
            &call,
            &request.input_arguments,
            &mut output_arguments,
        );

        if status.is_good() {
            CallMethodResult {
                status,
                output_arguments,
            }
        } else {
            CallMethodResult::failed(status)
        }
    }

    fn validate_parent(
        &self,
        parent: &NodeId,
        browse_name: &QualifiedName,
    ) -> Result<(), RegistrationError> {
        let Some(parent_node) = self.nodes.get(parent) else {
            return Err(RegistrationError::new(
                StatusCode::BadParentNodeIdInvalid,
                format!("parent node {} does not exist", parent),
            ));
        };
        if parent_node.method().is_some() {
            return Err(RegistrationError::new(
                StatusCode::BadParentNodeIdInvalid,
                format!("parent node {} is a method", parent),
            ));
        }
        if self.find_child(parent, browse_name).is_some() {
            return Err(RegistrationError::new(
                StatusCode::BadBrowseNameDuplicated,
                format!("{} already has a child named {}", parent, browse_name),
            ));
        }
        Ok(())
    }

    fn next_node_id(&mut self) -> Result<NodeId, RegistrationError> {
        let Some(value) = self.next_node_id else {
            return Err(RegistrationError::new(
                StatusCode::BadOutOfRange,
                "numeric node identifiers exhausted",
            ));
        };
        let node_id = NodeId::numeric(APPLICATION_NAMESPACE_INDEX, value);
        if self.nodes.contains_key(&node_id) {
            return Err(RegistrationError::new(
                StatusCode::BadNodeIdExists,
                format!("node {} already exists", node_id),
            ));
        }
        self.next_node_id = value.checked_add(1);
        Ok(node_id)
    }

    fn insert_child(&mut self, parent: &NodeId, reference_type: NodeId, mut node: UaNode) {
        node.attach_to(parent.clone(), reference_type);
        let node_id = node.node_id().clone();
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children_mut().push(node_id.clone());
        }
        self.nodes.insert(node_id, node);
    }
}

impl AddressSpaceInterface for InMemoryAddressSpace {
    fn method_table(&self) -> &MethodTable {
        &self.methods
    }

    fn method_table_mut(&mut self) -> &mut MethodTable {
        &mut self.methods
    }

    fn add_method_node(&mut self, request: MethodNodeRequest) -> Result<NodeId, RegistrationError> {
        self.validate_parent(&request.parent, &request.browse_name)?;

        let node_id = self.next_node_id()?;
        let method = MethodNode::new(
            request.input_arguments,
            request.output_argument,
            request.attributes.executable,
            request.attributes.user_executable,
            request.callback,
            request.context,
        );
        let node = UaNode::new(
            node_id.clone(),
            request.browse_name,
            request.attributes.display_name,
            NodeKind::Method(method),
        )
        .with_description(request.attributes.description);
        self.insert_child(&request.parent, request.reference_type, node);

        Ok(node_id)
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}
