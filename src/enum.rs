use serde::Serialize;

/// A single enum value: name => number.
/// Numbers need not be unique when `allow_alias` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue(pub String, pub i32);

/// Enum defines a proto [emum]
/// [enum] https://developers.google.com/protocol-buffers/docs/proto3#enum
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enum {
    /// The enum path inside its package: e.g Outer.Status => ["Outer", "Status"]
    pub path: Vec<String>,

    /// Values in declaration order
    pub values: Vec<EnumValue>,
}

impl Enum {
    pub fn new(path: Vec<String>) -> Self {
        Self {
            path,
            values: Vec::new(),
        }
    }

    /// Insert a new value with the given key and id
    pub fn insert(&mut self, key: String, id: i32) {
        self.values.push(EnumValue(key, id));
    }
}
