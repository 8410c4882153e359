//! Generate Ruby type signatures from a compiled schema file
//!
//! # Example:
//! Given the following proto file
//!
//! ```proto
//! syntax = "proto3";
//! package pb.hello;
//!
//! service HelloWorld {
//!   rpc LotsOfReplies(SayHelloRequest) returns (stream SayHelloResponse) {}
//! }
//!
//! message SayHelloRequest {
//!   optional string name = 1;
//! }
//!
//! message SayHelloResponse {
//!   repeated string hellos = 1;
//! }
//! ```
//! This module generates `hello_pb.rbs`:
//!
//! ```rbs
//! # Code generated by protoc-gen-rbs. DO NOT EDIT.
//! # source: hello.proto
//!
//! module Pb
//! end
//!
//! module Pb::Hello
//! end
//!
//! class Pb::Hello::SayHelloRequest
//!   def self.decode: (String) -> Pb::Hello::SayHelloRequest
//!   def self.encode: (Pb::Hello::SayHelloRequest) -> String
//!   def self.decode_json: (String, untyped) -> Pb::Hello::SayHelloRequest
//!   def self.encode_json: (Pb::Hello::SayHelloRequest, untyped) -> String
//!   def self.descriptor: () -> ::Google::Protobuf::Descriptor
//!
//!   def initialize: (Hash<untyped,untyped>) -> void
//!   def initialize: (
//!     name: String?
//!   ) -> void
//!
//!   def name: () -> String?
//!   def name=: (String?) -> void
//!   def clear_name: () -> void
//!   def has_name?: () -> bool
//!
//!   def []: (String) -> untyped
//!   def []=: (String, untyped) -> void
//!   def to_h: () -> Hash<Symbol, untyped>
//! end
//! ...
//! ```
//!
//! and `hello_services_pb.rbs`:
//!
//! ```rbs
//! # Code generated by protoc-gen-rbs. DO NOT EDIT.
//! # source: hello.proto
//!
//! module Pb::Hello::HelloWorld
//!   class Service
//!   end
//!
//!   class Stub < GRPC::ClientStub
//!     def initialize: (String, GRPC::Core::ChannelCredentials, untyped) -> void
//!
//!     def lots_of_replies: (Pb::Hello::SayHelloRequest) -> Enumerator<Pb::Hello::SayHelloResponse>
//!   end
//! end
//! ```

#[macro_use]
mod printer;
mod constants;
mod fragments;
pub mod identifier;
pub mod naming;
pub mod renderer;
pub mod types;

pub use identifier::IdentifierValidator;
pub use renderer::Renderer;
pub use types::TypeMapper;

/// The mapping functions shared by every rendering pass
#[derive(Debug, Default, Clone, Copy)]
pub struct Toolkit {
    pub types: TypeMapper,
    pub identifiers: IdentifierValidator,
}
