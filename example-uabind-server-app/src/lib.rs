pub mod method_definition;

use method_definition::{clock, math, text};
use uabind::NodeId;
use uabind_method::error::BindError;
use uabind_server::UaServer;

/// Node ids of the sample methods, as returned by [`bind_sample_methods`].
#[derive(Debug, Clone)]
pub struct SampleMethodIds {
    pub length_plus_offset: NodeId,
    pub add: NodeId,
    pub divide: NodeId,
    pub shift_timestamp: NodeId,
}

/// Binds every sample method as a component of `parent`.
pub fn bind_sample_methods(
    server: &mut UaServer,
    parent: &NodeId,
) -> Result<SampleMethodIds, BindError> {
    Ok(SampleMethodIds {
        length_plus_offset: server.add_method(parent, "LengthPlusOffset", text::length_plus_offset)?,
        add: server.add_method(parent, "Add", math::add)?,
        divide: server.add_method(parent, "Divide", math::divide)?,
        shift_timestamp: server.add_method(parent, "ShiftTimestamp", clock::shift_timestamp)?,
    })
}
