use serde::Serialize;

use crate::field::ValueType;

/// Rpc represents a service [method]
/// [method] https://developers.google.com/protocol-buffers/docs/proto3#services
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rpc {
    pub name: String,
    pub request_type: ValueType,
    pub request_stream: bool,
    pub response_type: ValueType,
    pub response_stream: bool,
}

impl Rpc {
    pub fn new(
        name: String,
        request_type: ValueType,
        request_stream: bool,
        response_type: ValueType,
        response_stream: bool,
    ) -> Self {
        Self {
            name,
            request_type,
            request_stream,
            response_type,
            response_stream,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub name: String,
    pub methods: Vec<Rpc>,
}

impl Service {
    pub fn new(name: String) -> Service {
        Self {
            name,
            methods: Vec::new(),
        }
    }

    pub fn add_rpc(&mut self, rpc: Rpc) {
        self.methods.push(rpc);
    }
}
