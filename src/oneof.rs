use serde::Serialize;

use crate::message::Message;

/// Oneof represents a proto [oneof] field
/// [oneof] https://developers.google.com/protocol-buffers/docs/proto#oneof
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Oneof {
    pub name: String,

    /// Names of the member fields, in declaration order
    #[serde(rename = "oneof")]
    pub values: Vec<String>,
}

impl Oneof {
    // Returns a new empty Oneof
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Add a field to the oneof
    pub fn add_field_name(&mut self, value: String) {
        self.values.push(value);
    }

    /// A synthetic oneof wraps a single proto3 optional field to track its presence.
    pub fn is_synthetic(&self, message: &Message) -> bool {
        match self.values.as_slice() {
            [name] => message
                .field(name)
                .map(|field| field.proto3_optional)
                .unwrap_or(false),
            _ => false,
        }
    }
}
