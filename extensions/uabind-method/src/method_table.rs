use crate::error::RegistrationError;
use crate::method_binding::MethodBinding;
use std::collections::HashMap;
use uabind::{NodeId, StatusCode};

/// Opaque context registered with a method node.
///
/// Handles are never reused, so a handle outliving its binding resolves to
/// nothing instead of to an unrelated method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BindingHandle(u32);

impl BindingHandle {
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug)]
struct MethodEntry {
    binding: MethodBinding,
    node_id: Option<NodeId>,
}

/// Owns every method binding of an address space.
///
/// A binding lives here for as long as the method node it is attached to.
#[derive(Debug)]
pub struct MethodTable {
    entries: HashMap<u32, MethodEntry>,
    by_node: HashMap<u64, BindingHandle>,
    /// `None` once every handle value has been issued.
    next_handle: Option<u32>,
}

impl Default for MethodTable {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            by_node: HashMap::new(),
            next_handle: Some(0),
        }
    }
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `binding` under a fresh handle.
    ///
    /// Fails with `BadOutOfRange` once all `u32` handle values have been
    /// issued.
    pub fn insert(&mut self, binding: MethodBinding) -> Result<BindingHandle, RegistrationError> {
        let Some(index) = self.next_handle else {
            return Err(RegistrationError::new(
                StatusCode::BadOutOfRange,
                "method binding handles exhausted",
            ));
        };
        self.next_handle = index.checked_add(1);
        self.entries.insert(
            index,
            MethodEntry {
                binding,
                node_id: None,
            },
        );
        Ok(BindingHandle(index))
    }

    /// Records the node a binding was registered as, making it retrievable
    /// by node id. Returns `false` if the handle is stale.
    pub fn attach_node(&mut self, handle: BindingHandle, node_id: NodeId) -> bool {
        let Some(entry) = self.entry_mut(handle) else {
            return false;
        };
        let key = node_id.hash_value();
        entry.node_id = Some(node_id);
        self.by_node.insert(key, handle);
        true
    }

    pub fn get(&self, handle: BindingHandle) -> Option<&MethodBinding> {
        self.entry(handle).map(|entry| &entry.binding)
    }

    pub fn node_id(&self, handle: BindingHandle) -> Option<&NodeId> {
        self.entry(handle).and_then(|entry| entry.node_id.as_ref())
    }

    pub fn find_by_node(&self, node_id: &NodeId) -> Option<(BindingHandle, &MethodBinding)> {
        let handle = *self.by_node.get(&node_id.hash_value())?;
        let entry = self.entry(handle)?;
        // Guards against hash collisions.
        (entry.node_id.as_ref() == Some(node_id)).then_some((handle, &entry.binding))
    }

    pub fn remove(&mut self, handle: BindingHandle) -> Option<MethodBinding> {
        let entry = self.entries.remove(&handle.0)?;
        if let Some(node_id) = &entry.node_id {
            let key = node_id.hash_value();
            if self.by_node.get(&key) == Some(&handle) {
                self.by_node.remove(&key);
            }
        }
        Some(entry.binding)
    }

    pub fn remove_by_node(&mut self, node_id: &NodeId) -> Option<MethodBinding> {
        let (handle, _) = self.find_by_node(node_id)?;
        self.remove(handle)
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, handle: BindingHandle) -> Option<&MethodEntry> {
        self.entries.get(&handle.0)
    }

    fn entry_mut(&mut self, handle: BindingHandle) -> Option<&mut MethodEntry> {
        self.entries.get_mut(&handle.0)
    }
}
