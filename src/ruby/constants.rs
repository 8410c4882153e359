use phf::phf_map;

/// A list of proto scalar to Ruby type
pub static TYPE_MAPPING: phf::Map<&'static str, &'static str> = phf_map! {
    "double" => "Float",
    "float" => "Float",
    "int32" => "Integer",
    "int64" => "Integer",
    "uint32" => "Integer",
    "uint64" => "Integer",
    "sint32" => "Integer",
    "sint64" => "Integer",
    "fixed32" => "Integer",
    "fixed64" => "Integer",
    "sfixed32" => "Integer",
    "sfixed64" => "Integer",
    "bool" => "bool",
    "string" => "String",
    "bytes" => "String",
};

/// Enum values cross the accessor boundary as integers
pub const ENUM_TYPE: &str = "Integer";

/// Escape type used when a declared kind can't be mapped
pub const UNTYPED: &str = "untyped";

/// Unstructured mapping accepted in place of a message when constructing
pub const UNTYPED_HASH: &str = "Hash<untyped, untyped>";

/// Wrapper for client streamed requests
pub const ENUMERABLE: &str = "Enumerable";

/// Wrapper for server streamed responses
pub const ENUMERATOR: &str = "Enumerator";

// Runtime types referenced by the generated signatures

pub const DESCRIPTOR: &str = "::Google::Protobuf::Descriptor";
pub const ENUM_DESCRIPTOR: &str = "::Google::Protobuf::EnumDescriptor";
pub const CLIENT_STUB: &str = "GRPC::ClientStub";
pub const CHANNEL_CREDENTIALS: &str = "GRPC::Core::ChannelCredentials";

pub const GENERATED_HEADER: &str = "# Code generated by protoc-gen-rbs. DO NOT EDIT.";

pub const INVALID_FIELD_NOTE: &str = "# Constants of the form Constant_1 are invalid. We've declined to type this as a result, taking a hash instead.";

pub const ENUM_CONSTANT_NOTE: &str =
    "# Constant declarations are not typed, use the value accessors instead.";
