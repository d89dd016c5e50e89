use crate::constants::NS0_INDEX;
use std::fmt;
use xxhash_rust::xxh3::Xxh3;

/// The identifier part of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u32),
    String(String),
}

/// Identifies a node within the address space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    /// The null node id (`i=0`), used where "no node" must be expressed.
    pub const NULL: NodeId = NodeId::numeric(NS0_INDEX, 0);

    pub const fn numeric(namespace: u16, value: u32) -> Self {
        Self {
            namespace,
            identifier: Identifier::Numeric(value),
        }
    }

    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::String(value.into()),
        }
    }

    /// Convenience for standard (namespace 0) numeric ids.
    pub const fn ns0(value: u32) -> Self {
        Self::numeric(NS0_INDEX, value)
    }

    pub fn is_null(&self) -> bool {
        match &self.identifier {
            Identifier::Numeric(value) => self.namespace == NS0_INDEX && *value == 0,
            Identifier::String(value) => self.namespace == NS0_INDEX && value.is_empty(),
        }
    }

    /// Stable 64-bit hash of the node id.
    ///
    /// The value is identical across platforms and process runs, so it can be
    /// used as a table key wherever a `NodeId` has to be looked up by value.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(&self.namespace.to_le_bytes());
        match &self.identifier {
            Identifier::Numeric(value) => {
                hasher.update(&[0]);
                hasher.update(&value.to_le_bytes());
            }
            Identifier::String(value) => {
                hasher.update(&[1]);
                hasher.update(value.as_bytes());
            }
        }
        hasher.digest()
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != NS0_INDEX {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(value) => write!(f, "i={}", value),
            Identifier::String(value) => write!(f, "s={}", value),
        }
    }
}
