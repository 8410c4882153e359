use derive_more::Display;
use serde::Serialize;

use crate::{file::Scope, scalar::Scalar};

/// FieldRule represents a proto [field rule]
/// [field rule] https://developers.google.com/protocol-buffers/docs/proto#specifying_field_rules
#[derive(Display, Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    #[display(fmt = "repeated")]
    Repeated,

    #[display(fmt = "optional")]
    Optional,

    #[display(fmt = "required")]
    Required,
}

/// A reference to a message or enum declared somewhere in the schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRef {
    /// The scope of the file declaring the referenced type
    pub scope: Scope,

    /// The type path inside the package, e.g ["SearchResponse", "Result"]
    pub path: Vec<String>,
}

impl TypeRef {
    pub fn new(scope: Scope, path: Vec<String>) -> Self {
        Self { scope, path }
    }

    /// The fully qualified proto name, e.g ".pb.foo.SearchResponse.Result"
    pub fn full_name(&self) -> String {
        self.scope.qualify(&self.path)
    }
}

/// The type of a single value: a scalar, a reference to a declared type,
/// or a name the schema compiler could not resolve
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "type", rename_all = "lowercase")]
pub enum ValueType {
    Scalar(Scalar),
    Enum(TypeRef),
    Message(TypeRef),
    Unresolved(String),
}

impl ValueType {
    /// Returns true for message references
    pub fn is_message(&self) -> bool {
        matches!(self, ValueType::Message(_))
    }
}

/// Field cardinality together with the value types it holds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Singular(ValueType),
    Repeated(ValueType),
    Map(ValueType, ValueType),
}

/// Field represents a proto message [field]
/// [field] https://developers.google.com/protocol-buffers/docs/proto#specifying_field_types
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// The field name as declared in the schema
    pub name: String,

    /// The field Id
    pub number: u32,

    /// The declared kind of the field
    pub kind: FieldKind,

    /// Set for proto3 `optional` fields (explicit presence)
    #[serde(skip_serializing_if = "is_false")]
    pub proto3_optional: bool,

    /// The name of the oneof containing this field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oneof: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Field {
    /// Creates a new field
    pub fn new<S: Into<String>>(name: S, number: u32, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            number,
            kind,
            proto3_optional: false,
            oneof: None,
        }
    }

    /// Mark the field as a proto3 optional field.
    /// Repeated and map fields can't carry explicit presence, so the flag is ignored for them.
    pub fn optional(mut self) -> Self {
        self.proto3_optional = matches!(self.kind, FieldKind::Singular(_));
        self
    }

    /// Attach the field to the given oneof
    pub fn in_oneof<S: Into<String>>(mut self, oneof: S) -> Self {
        self.oneof = Some(oneof.into());
        self
    }

    /// Returns true when the field belongs to a real, multi-valued oneof
    /// rather than the synthetic wrapper of a proto3 optional field
    pub fn in_real_oneof(&self) -> bool {
        self.oneof.is_some() && !self.proto3_optional
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldKind, ValueType};
    use crate::scalar::Scalar;

    #[test]
    fn it_should_not_mark_repeated_fields_optional() {
        let field = Field::new(
            "ids",
            1,
            FieldKind::Repeated(ValueType::Scalar(Scalar::Int32)),
        )
        .optional();
        assert!(!field.proto3_optional);
    }

    #[test]
    fn it_should_detect_real_oneof_membership() {
        let kind = FieldKind::Singular(ValueType::Scalar(Scalar::String));
        let member = Field::new("email", 1, kind.clone()).in_oneof("contact");
        assert!(member.in_real_oneof());

        let synthetic = Field::new("nick", 2, kind).optional().in_oneof("_nick");
        assert!(!synthetic.in_real_oneof());
    }
}
