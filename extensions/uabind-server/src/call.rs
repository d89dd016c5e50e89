use uabind::{NodeId, StatusCode, Variant};

/// One method invocation as requested by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct CallMethodRequest {
    /// The object the method is called on.
    pub object_id: NodeId,
    pub method_id: NodeId,
    pub input_arguments: Vec<Variant>,
}

impl CallMethodRequest {
    pub fn new(object_id: NodeId, method_id: NodeId, input_arguments: Vec<Variant>) -> Self {
        Self {
            object_id,
            method_id,
            input_arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallMethodResult {
    pub status: StatusCode,
    /// Empty unless `status` is good.
    pub output_arguments: Vec<Variant>,
}

impl CallMethodResult {
    pub fn failed(status: StatusCode) -> Self {
        Self {
            status,
            output_arguments: Vec::new(),
        }
    }

    /// The single output value of a successful call.
    pub fn output(&self) -> Option<&Variant> {
        if self.status.is_good() {
            self.output_arguments.first()
        } else {
            None
        }
    }
}
