//! protoc-gen-rbs generates RBS type signatures for the Ruby classes
//! produced by `protoc --ruby_out` and `grpc_tools_ruby_protoc`.
//!
//! Schema files reach the generator either as compiled descriptors, through the
//! protoc plugin protocol (see [`plugin`]), or straight from `.proto` sources (see [`file_parser`]).

pub mod config;
pub mod descriptor;
pub mod r#enum;
pub mod error;
pub mod field;
pub mod file;
pub mod file_parser;
pub mod generator;
pub mod import;
mod iterator_with_position;
pub mod message;
pub mod oneof;
pub mod parse_error;
pub mod plugin;
mod position;
pub mod resolver;
pub mod ruby;
pub mod scalar;
pub mod service;
mod token;
mod tokenizer;
pub mod walker;
