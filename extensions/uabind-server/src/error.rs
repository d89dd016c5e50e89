use thiserror::Error;
use uabind::NodeId;
use uabind_method::error::RegistrationError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("node {0} is part of the standard namespace and cannot be deleted")]
    ProtectedNode(NodeId),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
