use crate::{field::FieldRule, parse_error::ParseError};
use derive_more::Display;

#[derive(Display, Debug, Clone, PartialEq)]
pub enum Token {
    #[display(fmt = "EOF")]
    EOF,

    #[display(fmt = "=")]
    Eq,

    #[display(fmt = ";")]
    Semi,

    #[display(fmt = ":")]
    Colon,

    #[display(fmt = "{{")]
    LBrace,

    #[display(fmt = "}}")]
    RBrace,

    #[display(fmt = "(")]
    LParen,

    #[display(fmt = ")")]
    RParen,

    #[display(fmt = "[")]
    LBrack,

    #[display(fmt = "]")]
    RBrack,

    #[display(fmt = "<")]
    LAngle,

    #[display(fmt = ">")]
    RAngle,

    #[display(fmt = ",")]
    Comma,

    #[display(fmt = "returns")]
    Returns,
    #[display(fmt = "syntax")]
    Syntax,
    #[display(fmt = "import")]
    Import,
    #[display(fmt = "public")]
    Public,
    #[display(fmt = "option")]
    Option,
    #[display(fmt = "service")]
    Service,
    #[display(fmt = "rpc")]
    Rpc,
    #[display(fmt = "stream")]
    Stream,
    #[display(fmt = "{}", _0)]
    FieldRule(FieldRule),
    #[display(fmt = "extensions")]
    Extensions,
    #[display(fmt = "map")]
    Map,
    #[display(fmt = "package")]
    Package,
    #[display(fmt = "message")]
    Message,
    #[display(fmt = "extend")]
    Extend,
    #[display(fmt = "enum")]
    Enum,
    #[display(fmt = "reserved")]
    Reserved,
    #[display(fmt = "oneof")]
    Oneof,

    #[display(fmt = "\"{}\"", _0)]
    String(String),

    #[display(fmt = "{}", _0)]
    Identifier(String),
}

impl Token {
    /// Returns the identifier held by this token.
    /// Keywords are valid identifiers in most positions (e.g a field named `message`).
    pub fn identifier(self) -> Result<String, ParseError> {
        match self {
            Token::Identifier(v) => Ok(v),
            Token::Returns
            | Token::Syntax
            | Token::Import
            | Token::Public
            | Token::Option
            | Token::Service
            | Token::Rpc
            | Token::Stream
            | Token::FieldRule(_)
            | Token::Extensions
            | Token::Map
            | Token::Package
            | Token::Message
            | Token::Extend
            | Token::Enum
            | Token::Reserved
            | Token::Oneof => Ok(self.to_string()),
            token => Err(ParseError::UnexpectedString(token)),
        }
    }

    pub fn into_quoted_string(self) -> Result<String, ParseError> {
        match self {
            Token::String(v) => Ok(v),
            token => Err(ParseError::UnexpectedString(token)),
        }
    }
}
