//! Fixed textual scaffolding of the generated signatures.
//!
//! Each function renders one structural unit from already computed type strings.

use super::{constants::*, printer::Printer};
use crate::r#enum::EnumValue;

/// An rpc stub signature: (method name, parameter type, return type)
pub struct StubMethod {
    pub name: String,
    pub param_type: String,
    pub return_type: String,
}

/// The generated file banner
pub fn file_header(source: &str) -> String {
    let mut p = Printer::new();
    emit!(p, GENERATED_HEADER);
    emit!(p, "# source: {}", source);
    p.into_string()
}

/// Empty declarations of the modules enclosing the file's types
pub fn module_declarations(modules: &[String]) -> String {
    let mut p = Printer::new();
    for module in modules {
        p.add_blank_line();
        emit!(p, "module {}", module);
        emit!(p, "end");
    }
    p.into_string()
}

/// The class line followed by the serialization class methods
pub fn class_header(name: &str) -> String {
    let mut p = Printer::new();
    emit_and_indent!(p, "class {}", name);
    emit!(p, "def self.decode: (String) -> {}", name);
    emit!(p, "def self.encode: ({}) -> String", name);
    emit!(p, "def self.decode_json: (String, untyped) -> {}", name);
    emit!(p, "def self.encode_json: ({}, untyped) -> String", name);
    emit!(p, "def self.descriptor: () -> {}", DESCRIPTOR);
    p.into_string()
}

/// The untyped bulk constructor, preceded by a note when some field names are not valid identifiers
pub fn bulk_initializer(has_invalid_fields: bool) -> String {
    let mut p = Printer::with_indent(2);
    if has_invalid_fields {
        emit!(p, INVALID_FIELD_NOTE);
    }
    emit!(p, "def initialize: (Hash<untyped,untyped>) -> void");
    p.into_string()
}

/// The named-argument constructor: one (name, type) pair per field
pub fn typed_initializer(args: &[(&str, String)]) -> String {
    let mut p = Printer::with_indent(2);
    if args.is_empty() {
        emit!(p, "def initialize: () -> void");
        return p.into_string();
    }

    emit_and_indent!(p, "def initialize: (");
    for (i, (name, t)) in args.iter().enumerate() {
        let separator = if i + 1 < args.len() { "," } else { "" };
        emit!(p, "{}: {}{}", name, t, separator);
    }
    outdent_and_emit!(p, ") -> void");
    p.into_string()
}

/// Reader, writer, clear and presence signatures of a field
pub fn field_accessors(name: &str, getter_type: &str, setter_type: &str) -> String {
    let mut p = Printer::with_indent(2);
    emit!(p, "def {}: () -> {}", name, getter_type);
    emit!(p, "def {}=: ({}) -> void", name, setter_type);
    emit!(p, "def clear_{}: () -> void", name);
    emit!(p, "def has_{}?: () -> bool", name);
    p.into_string()
}

/// The discriminator of a oneof: the name of the member set, if any
pub fn oneof_accessor(name: &str) -> String {
    let mut p = Printer::with_indent(2);
    emit!(p, "def {}: () -> Symbol?", name);
    p.into_string()
}

/// Generic index accessors and the class end
pub fn class_footer() -> String {
    let mut p = Printer::with_indent(2);
    emit!(p, "def []: (String) -> untyped");
    emit!(p, "def []=: (String, untyped) -> void");
    emit!(p, "def to_h: () -> Hash<Symbol, untyped>");
    outdent_and_emit!(p, "end");
    p.into_string()
}

/// An enum module: value accessors followed by lookup, resolve and descriptor
pub fn enum_block(name: &str, values: &[EnumValue]) -> String {
    let mut p = Printer::new();
    emit_and_indent!(p, "module {}", name);

    if !values.is_empty() {
        emit!(p, ENUM_CONSTANT_NOTE);
        for EnumValue(value_name, number) in values {
            emit!(p, "# self::{} = {}", value_name, number);
            emit!(p, "def {}: () -> Integer # = {}", value_name, number);
        }
        p.add_blank_line();
    }

    emit!(p, "def self.lookup: (value: Integer) -> Symbol?");
    emit!(p, "def self.resolve: (value: Symbol) -> Integer?");
    emit!(p, "def self.descriptor: () -> {}", ENUM_DESCRIPTOR);
    outdent_and_emit!(p, "end");
    p.into_string()
}

/// A service module with its server marker class and client stub
pub fn service_block(module: &str, methods: &[StubMethod]) -> String {
    let mut p = Printer::new();
    emit_and_indent!(p, "module {}", module);
    emit!(p, "class Service");
    emit!(p, "end");
    p.add_blank_line();

    emit_and_indent!(p, "class Stub < {}", CLIENT_STUB);
    emit!(
        p,
        "def initialize: (String, {}, untyped) -> void",
        CHANNEL_CREDENTIALS
    );
    for method in methods {
        p.add_blank_line();
        emit!(
            p,
            "def {}: ({}) -> {}",
            method.name,
            method.param_type,
            method.return_type
        );
    }
    outdent_and_emit!(p, "end");
    outdent_and_emit!(p, "end");
    p.into_string()
}
