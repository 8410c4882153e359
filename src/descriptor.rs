use prost_types::{
    field_descriptor_proto::{Label, Type},
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    ServiceDescriptorProto,
};

use crate::{
    field::{Field, FieldKind, TypeRef, ValueType},
    file::{File, Scope},
    import::Import,
    message::Message,
    oneof::Oneof,
    r#enum::Enum,
    resolver::{Symbol, SymbolTable},
    scalar::Scalar,
    service::{Rpc, Service},
};

/// DescriptorAdapter converts compiled file descriptors into schema Files.
/// Type names are resolved against every file of the request, dependencies included.
#[derive(Debug, Default)]
pub struct DescriptorAdapter {
    symbols: SymbolTable,
}

impl DescriptorAdapter {
    /// Index the messages, enums and map entries declared by the given files
    pub fn new(files: &[FileDescriptorProto]) -> Self {
        let mut adapter = Self::default();

        for file in files {
            let scope = scope(file);
            adapter.define_types(&scope, &[], &file.message_type, &file.enum_type);
        }

        // map entries may reference any message, define them once every type is known
        for file in files {
            let scope = scope(file);
            adapter.define_map_entries(&scope, &[], &file.message_type);
        }

        adapter
    }

    fn define_types(
        &mut self,
        scope: &Scope,
        parent: &[String],
        messages: &[DescriptorProto],
        enums: &[EnumDescriptorProto],
    ) {
        for e in enums {
            let path = child_path(parent, e.name());
            self.symbols.define(
                scope.qualify(&path),
                Symbol::Enum(TypeRef::new(scope.clone(), path)),
            );
        }

        for msg in messages.iter().filter(|msg| !is_map_entry(msg)) {
            let path = child_path(parent, msg.name());
            self.symbols.define(
                scope.qualify(&path),
                Symbol::Message(TypeRef::new(scope.clone(), path.clone())),
            );
            self.define_types(scope, &path, &msg.nested_type, &msg.enum_type);
        }
    }

    fn define_map_entries(&mut self, scope: &Scope, parent: &[String], messages: &[DescriptorProto]) {
        for msg in messages {
            let path = child_path(parent, msg.name());

            if is_map_entry(msg) {
                let entry_type = |number: i32| {
                    msg.field
                        .iter()
                        .find(|field| field.number() == number)
                        .map(|field| self.value_type(field))
                        .unwrap_or_else(|| ValueType::Unresolved(scope.qualify(&path)))
                };
                let symbol = Symbol::MapEntry(entry_type(1), entry_type(2));
                self.symbols.define(scope.qualify(&path), symbol);
            } else {
                self.define_map_entries(scope, &path, &msg.nested_type);
            }
        }
    }

    /// Convert a file descriptor
    pub fn convert(&self, file: &FileDescriptorProto) -> File {
        let scope = scope(file);

        let imports = file
            .dependency
            .iter()
            .enumerate()
            .map(|(i, path)| {
                match file.public_dependency.iter().any(|&p| p as usize == i) {
                    true => Import::Public(path.clone()),
                    false => Import::Internal(path.clone()),
                }
            })
            .collect();

        File {
            path: file.name().to_string(),
            imports,
            messages: file
                .message_type
                .iter()
                .filter(|msg| !is_map_entry(msg))
                .map(|msg| self.convert_message(&[], msg))
                .collect(),
            enums: file
                .enum_type
                .iter()
                .map(|e| convert_enum(&[], e))
                .collect(),
            services: file
                .service
                .iter()
                .map(|service| self.convert_service(service))
                .collect(),
            scope,
        }
    }

    fn convert_message(&self, parent: &[String], msg: &DescriptorProto) -> Message {
        let mut message = Message::new(child_path(parent, msg.name()));

        for field in msg.field.iter() {
            let mut converted = Field::new(field.name(), field.number() as u32, self.kind(field));
            converted.proto3_optional = field.proto3_optional();
            converted.oneof = field
                .oneof_index
                .and_then(|i| msg.oneof_decl.get(i as usize))
                .map(|oneof| oneof.name().to_string());
            message.add_field(converted);
        }

        for (i, decl) in msg.oneof_decl.iter().enumerate() {
            let mut oneof = Oneof::new(decl.name());
            msg.field
                .iter()
                .filter(|field| field.oneof_index.map(|idx| idx as usize) == Some(i))
                .for_each(|field| oneof.add_field_name(field.name().to_string()));
            message.add_oneof(oneof);
        }

        for nested in msg.nested_type.iter().filter(|msg| !is_map_entry(msg)) {
            let nested = self.convert_message(&message.path, nested);
            message.add_nested_message(nested);
        }

        for e in msg.enum_type.iter() {
            let e = convert_enum(&message.path, e);
            message.add_nested_enum(e);
        }

        message
    }

    fn convert_service(&self, service: &ServiceDescriptorProto) -> Service {
        let mut converted = Service::new(service.name().to_string());

        for method in service.method.iter() {
            converted.add_rpc(Rpc::new(
                method.name().to_string(),
                self.reference(method.input_type()),
                method.client_streaming(),
                self.reference(method.output_type()),
                method.server_streaming(),
            ));
        }

        converted
    }

    fn kind(&self, field: &FieldDescriptorProto) -> FieldKind {
        if field.label() != Label::Repeated {
            return FieldKind::Singular(self.value_type(field));
        }

        match self.symbols.get(field.type_name()) {
            Some(Symbol::MapEntry(key, value)) => FieldKind::Map(key.clone(), value.clone()),
            _ => FieldKind::Repeated(self.value_type(field)),
        }
    }

    fn value_type(&self, field: &FieldDescriptorProto) -> ValueType {
        if field.type_name.is_some() {
            return self.reference(field.type_name());
        }

        match scalar(field.r#type()) {
            Some(scalar) => ValueType::Scalar(scalar),
            None => ValueType::Unresolved(field.r#type().as_str_name().to_string()),
        }
    }

    /// Look up a fully qualified type name
    fn reference(&self, type_name: &str) -> ValueType {
        self.symbols
            .get(type_name)
            .and_then(Symbol::value_type)
            .unwrap_or_else(|| ValueType::Unresolved(type_name.to_string()))
    }
}

fn scope(file: &FileDescriptorProto) -> Scope {
    Scope {
        package: file.package().to_string(),
        ruby_package: file
            .options
            .as_ref()
            .and_then(|options| options.ruby_package.clone()),
    }
}

fn child_path(parent: &[String], name: &str) -> Vec<String> {
    let mut path = parent.to_vec();
    path.push(name.to_string());
    path
}

fn is_map_entry(msg: &DescriptorProto) -> bool {
    msg.options
        .as_ref()
        .map(|options| options.map_entry())
        .unwrap_or(false)
}

fn convert_enum(parent: &[String], e: &EnumDescriptorProto) -> Enum {
    let mut converted = Enum::new(child_path(parent, e.name()));
    for value in e.value.iter() {
        converted.insert(value.name().to_string(), value.number());
    }
    converted
}

fn scalar(r#type: Type) -> Option<Scalar> {
    let scalar = match r#type {
        Type::Double => Scalar::Double,
        Type::Float => Scalar::Float,
        Type::Int64 => Scalar::Int64,
        Type::Uint64 => Scalar::Uint64,
        Type::Int32 => Scalar::Int32,
        Type::Fixed64 => Scalar::Fixed64,
        Type::Fixed32 => Scalar::Fixed32,
        Type::Bool => Scalar::Bool,
        Type::String => Scalar::String,
        Type::Bytes => Scalar::Bytes,
        Type::Uint32 => Scalar::Uint32,
        Type::Sfixed32 => Scalar::Sfixed32,
        Type::Sfixed64 => Scalar::Sfixed64,
        Type::Sint32 => Scalar::Sint32,
        Type::Sint64 => Scalar::Sint64,
        Type::Group | Type::Message | Type::Enum => return None,
    };
    Some(scalar)
}

#[cfg(test)]
pub mod test_util {
    use prost_types::{
        field_descriptor_proto::{Label, Type},
        FieldDescriptorProto,
    };

    /// Build a field descriptor the way protoc fills it
    pub fn field(name: &str, number: i32, label: Label, r#type: Type) -> FieldDescriptorProto {
        FieldDescriptorProto {
            name: Some(name.to_string()),
            number: Some(number),
            label: Some(label as i32),
            r#type: Some(r#type as i32),
            ..Default::default()
        }
    }

    /// Build a message or enum field descriptor referencing the given type
    pub fn reference(
        name: &str,
        number: i32,
        label: Label,
        r#type: Type,
        type_name: &str,
    ) -> FieldDescriptorProto {
        FieldDescriptorProto {
            type_name: Some(type_name.to_string()),
            ..field(name, number, label, r#type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        test_util::{field, reference},
        DescriptorAdapter,
    };
    use crate::{
        field::{FieldKind, ValueType},
        import::Import,
        scalar::Scalar,
    };
    use pretty_assertions::assert_eq;
    use prost_types::{
        field_descriptor_proto::{Label, Type},
        DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
        FileDescriptorProto, FileOptions, MessageOptions, MethodDescriptorProto,
        OneofDescriptorProto, ServiceDescriptorProto,
    };

    fn user_file() -> FileDescriptorProto {
        let counts_entry = DescriptorProto {
            name: Some("CountsEntry".into()),
            field: vec![
                field("key", 1, Label::Optional, Type::String),
                reference("value", 2, Label::Optional, Type::Message, ".pb.common.Count"),
            ],
            options: Some(MessageOptions {
                map_entry: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let user = DescriptorProto {
            name: Some("User".into()),
            field: vec![
                field("id", 1, Label::Optional, Type::Int64),
                FieldDescriptorProto {
                    proto3_optional: Some(true),
                    oneof_index: Some(1),
                    ..field("nick", 2, Label::Optional, Type::String)
                },
                FieldDescriptorProto {
                    oneof_index: Some(0),
                    ..field("email", 3, Label::Optional, Type::String)
                },
                reference("counts", 4, Label::Repeated, Type::Message, ".pb.user.User.CountsEntry"),
                reference("status", 5, Label::Optional, Type::Enum, ".pb.user.Status"),
                reference("friends", 6, Label::Repeated, Type::Message, ".pb.user.User"),
            ],
            nested_type: vec![counts_entry],
            oneof_decl: vec![
                OneofDescriptorProto {
                    name: Some("contact".into()),
                    ..Default::default()
                },
                OneofDescriptorProto {
                    name: Some("_nick".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        FileDescriptorProto {
            name: Some("pb/user.proto".into()),
            package: Some("pb.user".into()),
            dependency: vec!["pb/common.proto".into()],
            public_dependency: vec![0],
            message_type: vec![user],
            enum_type: vec![EnumDescriptorProto {
                name: Some("Status".into()),
                value: vec![EnumValueDescriptorProto {
                    name: Some("STATUS_UNKNOWN".into()),
                    number: Some(0),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            service: vec![ServiceDescriptorProto {
                name: Some("Users".into()),
                method: vec![MethodDescriptorProto {
                    name: Some("Watch".into()),
                    input_type: Some(".pb.user.User".into()),
                    output_type: Some(".pb.user.User".into()),
                    server_streaming: Some(true),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            options: Some(FileOptions {
                ruby_package: Some("Acme::Users".into()),
                ..Default::default()
            }),
            syntax: Some("proto3".into()),
            ..Default::default()
        }
    }

    fn common_file() -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("pb/common.proto".into()),
            package: Some("pb.common".into()),
            message_type: vec![DescriptorProto {
                name: Some("Count".into()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn it_should_convert_a_file() {
        let files = vec![common_file(), user_file()];
        let file = DescriptorAdapter::new(&files).convert(&files[1]);

        assert_eq!(file.path, "pb/user.proto");
        assert_eq!(file.scope.package, "pb.user");
        assert_eq!(file.scope.ruby_package.as_deref(), Some("Acme::Users"));
        assert_eq!(file.imports, vec![Import::Public("pb/common.proto".into())]);

        let user = &file.messages[0];
        assert!(user.nested.is_empty(), "map entries are not messages");
        assert_eq!(
            user.field("id").unwrap().kind,
            FieldKind::Singular(ValueType::Scalar(Scalar::Int64))
        );

        let nick = user.field("nick").unwrap();
        assert!(nick.proto3_optional);
        assert_eq!(nick.oneof.as_deref(), Some("_nick"));
        assert!(user.field("email").unwrap().in_real_oneof());

        match &user.field("counts").unwrap().kind {
            FieldKind::Map(ValueType::Scalar(Scalar::String), ValueType::Message(count)) => {
                assert_eq!(count.full_name(), ".pb.common.Count")
            }
            other => panic!("unexpected kind {:?}", other),
        }
        assert!(matches!(
            user.field("status").unwrap().kind,
            FieldKind::Singular(ValueType::Enum(_))
        ));
        assert!(matches!(
            user.field("friends").unwrap().kind,
            FieldKind::Repeated(ValueType::Message(_))
        ));

        let oneofs = user
            .real_oneofs()
            .map(|o| (o.name.as_str(), o.values.clone()))
            .collect::<Vec<_>>();
        assert_eq!(oneofs, vec![("contact", vec!["email".to_string()])]);

        let rpc = &file.services[0].methods[0];
        assert!(!rpc.request_stream);
        assert!(rpc.response_stream);
        assert!(rpc.request_type.is_message());

        assert_eq!(file.enums[0].values[0].0, "STATUS_UNKNOWN");
    }

    #[test]
    fn it_should_keep_unknown_references_unresolved() {
        let files = vec![user_file()];
        let file = DescriptorAdapter::new(&files).convert(&files[0]);

        match &file.messages[0].field("counts").unwrap().kind {
            FieldKind::Map(_, value) => {
                assert_eq!(value, &ValueType::Unresolved(".pb.common.Count".into()))
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
