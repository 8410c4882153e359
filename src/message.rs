use serde::Serialize;

use crate::{field::Field, oneof::Oneof, r#enum::Enum};

/// Message represents a proto [message]
/// [message] https://developers.google.com/protocol-buffers/docs/proto3#simple
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    /// The message path inside its package: e.g Outer.Inner => ["Outer", "Inner"]
    pub path: Vec<String>,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Oneofs in declaration order, synthetic ones included
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oneofs: Vec<Oneof>,

    /// Nested messages
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Message>,

    /// Nested enums
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,
}

impl Message {
    /// Returns a new message for the given path
    pub fn new(path: Vec<String>) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// The message's own name
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn add_oneof(&mut self, oneof: Oneof) {
        self.oneofs.push(oneof);
    }

    pub fn add_nested_message(&mut self, message: Message) {
        self.nested.push(message);
    }

    pub fn add_nested_enum(&mut self, e: Enum) {
        self.enums.push(e);
    }

    /// Get the field with the provided name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Oneofs that are real unions, i.e not the synthetic wrapper of a proto3 optional field
    pub fn real_oneofs(&self) -> impl Iterator<Item = &Oneof> {
        self.oneofs
            .iter()
            .filter(move |oneof| !oneof.is_synthetic(self))
    }

    /// Returns an iterator over this message and all its nested messages (depth-first, pre-order)
    pub fn messages_iter(&self) -> Box<dyn Iterator<Item = &Message> + '_> {
        Box::new(
            std::iter::once(self).chain(self.nested.iter().flat_map(|msg| msg.messages_iter())),
        )
    }
}
