use derive_more::Display;
use phf::phf_map;
use serde::Serialize;

/// Scalar defines all the possible [scalar value types]
/// [scalar value types] https://developers.google.com/protocol-buffers/docs/overview#scalar
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    #[display(fmt = "double")]
    Double,
    #[display(fmt = "float")]
    Float,
    #[display(fmt = "int32")]
    Int32,
    #[display(fmt = "int64")]
    Int64,
    #[display(fmt = "uint32")]
    Uint32,
    #[display(fmt = "uint64")]
    Uint64,
    #[display(fmt = "sint32")]
    Sint32,
    #[display(fmt = "sint64")]
    Sint64,
    #[display(fmt = "fixed32")]
    Fixed32,
    #[display(fmt = "fixed64")]
    Fixed64,
    #[display(fmt = "sfixed32")]
    Sfixed32,
    #[display(fmt = "sfixed64")]
    Sfixed64,
    #[display(fmt = "bool")]
    Bool,
    #[display(fmt = "string")]
    String,
    #[display(fmt = "bytes")]
    Bytes,
}

static SCALARS: phf::Map<&'static str, Scalar> = phf_map! {
    "double" => Scalar::Double,
    "float" => Scalar::Float,
    "int32" => Scalar::Int32,
    "int64" => Scalar::Int64,
    "uint32" => Scalar::Uint32,
    "uint64" => Scalar::Uint64,
    "sint32" => Scalar::Sint32,
    "sint64" => Scalar::Sint64,
    "fixed32" => Scalar::Fixed32,
    "fixed64" => Scalar::Fixed64,
    "sfixed32" => Scalar::Sfixed32,
    "sfixed64" => Scalar::Sfixed64,
    "bool" => Scalar::Bool,
    "string" => Scalar::String,
    "bytes" => Scalar::Bytes,
};

impl Scalar {
    /// Returns the scalar for the given proto keyword, if any
    pub fn from_name(name: &str) -> Option<Scalar> {
        SCALARS.get(name).copied()
    }
}
