use super::{constants::*, naming};
use crate::{
    field::{Field, FieldKind, ValueType},
    service::Rpc,
};

/// The syntactic position a field type is rendered in
#[derive(Debug, Clone, Copy, PartialEq)]
enum Usage {
    Accessor,
    Constructor,
}

/// TypeMapper computes the Ruby type expression of schema elements
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeMapper;

impl TypeMapper {
    /// The type returned by the field's reader
    pub fn getter_type(&self, field: &Field) -> String {
        self.field_type(field, Usage::Accessor)
    }

    /// The type accepted by the field's writer
    pub fn setter_type(&self, field: &Field) -> String {
        self.field_type(field, Usage::Accessor)
    }

    /// The type accepted for the field as a named constructor argument.
    /// Messages may also be given as plain hashes.
    pub fn constructor_field_type(&self, field: &Field) -> String {
        self.field_type(field, Usage::Constructor)
    }

    /// The rpc stub parameter type
    pub fn method_param_type(&self, rpc: &Rpc) -> String {
        let t = self.value_type(&rpc.request_type);
        match rpc.request_stream {
            true => format!("{}<{}>", ENUMERABLE, t),
            false => t,
        }
    }

    /// The rpc stub return type, lazily enumerated when the server streams
    pub fn method_return_type(&self, rpc: &Rpc) -> String {
        let t = self.value_type(&rpc.response_type);
        match rpc.response_stream {
            true => format!("{}<{}>", ENUMERATOR, t),
            false => t,
        }
    }

    fn field_type(&self, field: &Field, usage: Usage) -> String {
        match &field.kind {
            FieldKind::Repeated(inner) => format!("Array<{}>", self.inner_type(inner, usage)),
            FieldKind::Map(key, value) => format!(
                "Hash<{}, {}>",
                self.value_type(key),
                self.inner_type(value, usage)
            ),
            // the oneof accessor tells which member is set
            FieldKind::Singular(t) if field.in_real_oneof() => self.inner_type(t, usage),
            FieldKind::Singular(t) if field.proto3_optional => nilable(self.inner_type(t, usage)),
            FieldKind::Singular(t) => self.inner_type(t, usage),
        }
    }

    fn inner_type(&self, t: &ValueType, usage: Usage) -> String {
        match (t, usage) {
            (ValueType::Message(_), Usage::Constructor) => {
                format!("{} | {}", self.value_type(t), UNTYPED_HASH)
            }
            _ => self.value_type(t),
        }
    }

    /// Base mapping of a single value type
    pub fn value_type(&self, t: &ValueType) -> String {
        match t {
            ValueType::Scalar(scalar) => TYPE_MAPPING
                .get(scalar.to_string().as_str())
                .copied()
                .unwrap_or(UNTYPED)
                .to_string(),
            ValueType::Enum(_) => ENUM_TYPE.to_string(),
            ValueType::Message(r) => naming::type_name(&r.scope, &r.path),
            ValueType::Unresolved(_) => UNTYPED.to_string(),
        }
    }
}

/// Make a type nilable. Unions are wrapped in parentheses first, `untyped` already admits nil.
fn nilable(t: String) -> String {
    if t == UNTYPED {
        t
    } else if t.contains(" | ") {
        format!("({})?", t)
    } else {
        format!("{}?", t)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeMapper;
    use crate::{
        field::{Field, FieldKind, TypeRef, ValueType},
        file::Scope,
        scalar::Scalar,
        service::Rpc,
    };

    const SCALARS: [(Scalar, &str); 15] = [
        (Scalar::Double, "Float"),
        (Scalar::Float, "Float"),
        (Scalar::Int32, "Integer"),
        (Scalar::Int64, "Integer"),
        (Scalar::Uint32, "Integer"),
        (Scalar::Uint64, "Integer"),
        (Scalar::Sint32, "Integer"),
        (Scalar::Sint64, "Integer"),
        (Scalar::Fixed32, "Integer"),
        (Scalar::Fixed64, "Integer"),
        (Scalar::Sfixed32, "Integer"),
        (Scalar::Sfixed64, "Integer"),
        (Scalar::Bool, "bool"),
        (Scalar::String, "String"),
        (Scalar::Bytes, "String"),
    ];

    fn message(name: &str) -> ValueType {
        ValueType::Message(TypeRef::new(Scope::new("pb.shop"), vec![name.to_string()]))
    }

    fn singular(t: ValueType) -> Field {
        Field::new("value", 1, FieldKind::Singular(t))
    }

    #[test]
    fn test_scalar_getter_and_setter_agree() {
        let mapper = TypeMapper;
        for (scalar, expected) in SCALARS {
            let field = singular(ValueType::Scalar(scalar));
            assert_eq!(mapper.getter_type(&field), expected);
            assert_eq!(mapper.setter_type(&field), expected);

            let optional = field.optional();
            assert_eq!(mapper.getter_type(&optional), format!("{}?", expected));
            assert_eq!(mapper.setter_type(&optional), format!("{}?", expected));
        }
    }

    #[test]
    fn test_enum_is_an_integer() {
        let e = ValueType::Enum(TypeRef::new(Scope::new("pb.shop"), vec!["Status".into()]));
        assert_eq!(TypeMapper.getter_type(&singular(e)), "Integer");
    }

    #[test]
    fn test_message_field() {
        let field = singular(message("Item"));
        assert_eq!(TypeMapper.getter_type(&field), "Pb::Shop::Item");
        assert_eq!(
            TypeMapper.constructor_field_type(&field),
            "Pb::Shop::Item | Hash<untyped, untyped>"
        );

        let optional = field.optional();
        assert_eq!(TypeMapper.getter_type(&optional), "Pb::Shop::Item?");
        assert_eq!(
            TypeMapper.constructor_field_type(&optional),
            "(Pb::Shop::Item | Hash<untyped, untyped>)?"
        );
    }

    #[test]
    fn test_repeated_field_is_never_nilable() {
        let field = Field::new("items", 1, FieldKind::Repeated(message("Item"))).optional();
        assert_eq!(TypeMapper.getter_type(&field), "Array<Pb::Shop::Item>");
        assert_eq!(
            TypeMapper.constructor_field_type(&field),
            "Array<Pb::Shop::Item | Hash<untyped, untyped>>"
        );
    }

    #[test]
    fn test_map_field() {
        let field = Field::new(
            "counts",
            1,
            FieldKind::Map(
                ValueType::Scalar(Scalar::String),
                ValueType::Scalar(Scalar::Int64),
            ),
        );
        assert_eq!(TypeMapper.getter_type(&field), "Hash<String, Integer>");

        let field = Field::new(
            "items",
            2,
            FieldKind::Map(ValueType::Scalar(Scalar::Int32), message("Item")),
        );
        assert_eq!(TypeMapper.getter_type(&field), "Hash<Integer, Pb::Shop::Item>");
        assert_eq!(
            TypeMapper.constructor_field_type(&field),
            "Hash<Integer, Pb::Shop::Item | Hash<untyped, untyped>>"
        );
    }

    #[test]
    fn test_real_oneof_member_is_not_nilable() {
        let field = singular(ValueType::Scalar(Scalar::String)).in_oneof("contact");
        assert_eq!(TypeMapper.getter_type(&field), "String");
    }

    #[test]
    fn test_synthetic_oneof_member_is_nilable() {
        let field = singular(ValueType::Scalar(Scalar::String))
            .optional()
            .in_oneof("_value");
        assert_eq!(TypeMapper.getter_type(&field), "String?");
    }

    #[test]
    fn test_unresolved_falls_back_to_untyped() {
        let field = singular(ValueType::Unresolved("google.protobuf.Any".into()));
        assert_eq!(TypeMapper.getter_type(&field), "untyped");
        assert_eq!(TypeMapper.getter_type(&field.optional()), "untyped");
    }

    #[test]
    fn test_method_types() {
        let rpc = |request_stream, response_stream| {
            Rpc::new(
                "GetThing".into(),
                message("GetThingRequest"),
                request_stream,
                message("ThingEvent"),
                response_stream,
            )
        };

        let unary = rpc(false, false);
        assert_eq!(TypeMapper.method_param_type(&unary), "Pb::Shop::GetThingRequest");
        assert_eq!(TypeMapper.method_return_type(&unary), "Pb::Shop::ThingEvent");

        let server_stream = rpc(false, true);
        assert_eq!(
            TypeMapper.method_return_type(&server_stream),
            "Enumerator<Pb::Shop::ThingEvent>"
        );

        let bidi = rpc(true, true);
        assert_eq!(
            TypeMapper.method_param_type(&bidi),
            "Enumerable<Pb::Shop::GetThingRequest>"
        );
        assert_eq!(
            TypeMapper.method_return_type(&bidi),
            "Enumerator<Pb::Shop::ThingEvent>"
        );
    }
}
