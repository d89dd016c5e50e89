use crate::address_space::InMemoryAddressSpace;
use crate::call::{CallMethodRequest, CallMethodResult};
use crate::config::ServerConfig;
use uabind::NodeId;
use uabind::constants::NS0_NAMESPACE_URI;
use uabind_method::error::BindError;
use uabind_method::{AddressSpaceInterface, MethodCallback};

/// Owns the configuration, the namespace array and the address space.
///
/// Registration needs `&mut self`; calls only need `&self`, so a fully set up
/// server can be shared (e.g. behind an `Arc`) and called from any number of
/// threads at once.
#[derive(Debug)]
pub struct UaServer {
    config: ServerConfig,
    namespaces: Vec<String>,
    address_space: InMemoryAddressSpace,
}

impl Default for UaServer {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

impl UaServer {
    pub fn new(config: ServerConfig) -> Self {
        let namespaces = vec![NS0_NAMESPACE_URI.to_owned(), config.application_uri.clone()];
        let address_space = InMemoryAddressSpace::new(&config);

        tracing::debug!(
            application_uri = %config.application_uri,
            locale = %config.locale,
            "created server"
        );

        Self {
            config,
            namespaces,
            address_space,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Namespace URIs; a URI's position is its namespace index.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn namespace_index(&self, uri: &str) -> Option<u16> {
        self.namespaces
            .iter()
            .position(|namespace| namespace == uri)
            .and_then(|index| u16::try_from(index).ok())
    }

    pub fn objects_folder(&self) -> NodeId {
        InMemoryAddressSpace::objects_folder_id()
    }

    pub fn address_space(&self) -> &InMemoryAddressSpace {
        &self.address_space
    }

    pub fn address_space_mut(&mut self) -> &mut InMemoryAddressSpace {
        &mut self.address_space
    }

    /// Binds `callback` as a method of `parent`.
    ///
    /// See [`AddressSpaceInterface::add_method`].
    pub fn add_method<F, Args>(
        &mut self,
        parent: &NodeId,
        method_name: &str,
        callback: F,
    ) -> Result<NodeId, BindError>
    where
        F: MethodCallback<Args>,
        Args: 'static,
    {
        self.address_space
            .add_method::<F, Args>(parent, method_name, callback)
    }

    pub fn call(&self, session_id: &NodeId, request: &CallMethodRequest) -> CallMethodResult {
        let span = tracing::debug_span!(
            "call",
            session_id = %session_id,
            object_id = %request.object_id,
            method_id = %request.method_id
        );
        let _enter = span.enter();

        let result = self.address_space.call(session_id, request);
        tracing::debug!(status = %result.status, "method call completed");
        result
    }

    /// Runs each request in order; one failing call does not affect the
    /// others.
    pub fn call_all(
        &self,
        session_id: &NodeId,
        requests: &[CallMethodRequest],
    ) -> Vec<CallMethodResult> {
        requests
            .iter()
            .map(|request| self.call(session_id, request))
            .collect()
    }
}
