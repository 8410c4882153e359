use crate::{
    field::{Field, FieldKind, FieldRule, ValueType},
    file::File,
    import::Import,
    message::Message,
    oneof::Oneof,
    parse_error::{ParseError, ParseFileError},
    r#enum::Enum,
    scalar::Scalar,
    service::{Rpc, Service},
    token::Token,
    tokenizer::Tokenizer,
};
use std::path::Path;

/// FileParser parse a single proto file into a schema File.
/// Type references are left unresolved, see [`crate::resolver::SymbolTable::resolve_file`].
pub struct FileParser<I: Iterator<Item = char>> {
    /// The path of the file being parsed, used as the File input path
    file_name: String,

    /// The tokenizer used to parse the file
    tokenizer: Tokenizer<I>,

    /// The file that will be populated as we parse
    file: File,

    /// Whether the file declared `syntax = "proto3"`
    proto3: bool,
}

impl<I: Iterator<Item = char>> FileParser<I> {
    /// Returns a new parser for the given filename and iterator
    pub fn new<S: Into<String>>(file_name: S, iter: I) -> Self {
        let file_name = file_name.into();
        Self {
            file: File {
                path: file_name.clone(),
                ..Default::default()
            },
            file_name,
            tokenizer: Tokenizer::new(iter),
            proto3: false,
        }
    }

    /// Parse the file and return it
    pub fn parse(mut self, content: &str) -> Result<File, ParseFileError> {
        match self.parse_helper() {
            Ok(()) => Ok(self.file),
            Err(error) => Err(ParseFileError::from_parse_error(
                error,
                &self.file_name,
                content,
                self.tokenizer.current_position(),
            )),
        }
    }

    fn parse_helper(&mut self) -> Result<(), ParseError> {
        loop {
            match self.tokenizer.next()? {
                Token::EOF => return Ok(()),
                Token::Package => {
                    self.parse_package()?;
                }
                Token::Import => {
                    self.parse_import()?;
                }
                Token::Syntax => {
                    let syntax = self.parse_syntax()?;
                    match syntax.as_str() {
                        "proto3" => self.proto3 = true,
                        "proto2" => self.proto3 = false,
                        _ => return Err(ParseError::ProtoSyntaxNotSupported(syntax)),
                    }
                }
                Token::Option => {
                    if let [name, value] = self.parse_option()?.as_slice() {
                        if name == "ruby_package" {
                            self.file.scope.ruby_package = Some(value.clone());
                        }
                    }
                }
                Token::Service => {
                    let service = self.parse_service()?;
                    self.file.services.push(service);
                }
                Token::Message => {
                    let message = self.parse_message(&[])?;
                    self.file.messages.push(message);
                }
                Token::Extend => {
                    self.parse_message(&[])?;
                }
                Token::Enum => {
                    let e = self.parse_enum(&[])?;
                    self.file.enums.push(e);
                }
                // relax extra ;
                Token::Semi => {}

                token => return Err(ParseError::UnexpectedTopLevelToken(token)),
            }
        }
    }

    /// Parse the [package] name
    /// For example:
    ///
    /// ```proto
    /// package foo.bar;
    /// ```
    ///
    /// [package] https://developers.google.com/protocol-buffers/docs/proto3#packages
    fn parse_package(&mut self) -> Result<(), ParseError> {
        if !self.file.scope.package.is_empty() {
            return Err(ParseError::PackageAlreadySet);
        }

        self.file.scope.package = self.read_identifier()?;
        self.expect_token(Token::Semi)?;
        Ok(())
    }

    /// Parse [import] statement
    /// For example:
    ///
    /// ```proto
    /// import "myproject/other_protos.proto";
    /// ```
    ///
    /// [import] https://developers.google.com/protocol-buffers/docs/proto3#importing_definitions
    fn parse_import(&mut self) -> Result<(), ParseError> {
        let import = match self.tokenizer.next()? {
            Token::Public => Import::Public(self.tokenizer.next()?.into_quoted_string()?),
            token => Import::Internal(token.into_quoted_string()?),
        };

        self.file.imports.push(import);
        self.expect_token(Token::Semi)?;
        Ok(())
    }

    /// Parse [syntax] statement
    ///
    /// ```proto
    /// syntax = "proto3";
    /// ```
    ///
    /// [syntax] https://developers.google.com/protocol-buffers/docs/proto3#simple
    fn parse_syntax(&mut self) -> Result<String, ParseError> {
        self.expect_token(Token::Eq)?;
        let version = self.read_quoted_string()?;
        self.expect_token(Token::Semi)?;
        Ok(version)
    }

    /// Parse [option] statement
    /// Note: we simply parse an option as the list of its identifiers and strings.
    /// Aggregate values (`{ ... }`) are flattened.
    ///
    /// [option] https://developers.google.com/protocol-buffers/docs/proto3#options
    fn parse_option(&mut self) -> Result<Vec<String>, ParseError> {
        let mut values = Vec::new();
        let mut depth = 0usize;

        loop {
            match self.tokenizer.next()? {
                Token::Semi if depth == 0 => break,
                Token::EOF => return Err(ParseError::EOF),
                Token::LBrace => depth += 1,
                Token::RBrace => depth = depth.saturating_sub(1),
                Token::Identifier(s) | Token::String(s) => {
                    values.push(s);
                }
                _ => {}
            }
        }

        Ok(values)
    }

    /// Parse a [message] statement
    ///
    /// For example:
    ///
    /// ```proto
    /// message SearchRequest {
    ///  string query = 1;
    ///  int32 page_number = 2;
    ///  int32 result_per_page = 3;
    /// }
    /// ```
    ///
    /// [message] https://developers.google.com/protocol-buffers/docs/proto3#simple
    fn parse_message(&mut self, parent: &[String]) -> Result<Message, ParseError> {
        let mut path = parent.to_vec();
        path.push(self.read_identifier()?);
        self.expect_token(Token::LBrace)?;

        let mut message = Message::new(path);
        let mut oneof: Option<Oneof> = None;

        loop {
            match self.tokenizer.next()? {
                Token::RBrace => match oneof.take() {
                    Some(oneof) => message.add_oneof(oneof),
                    None => break,
                },
                Token::EOF => return Err(ParseError::EOF),
                Token::Message => {
                    let nested = self.parse_message(&message.path)?;
                    message.add_nested_message(nested);
                }
                Token::Oneof => {
                    let name = self.read_identifier()?;
                    oneof = Some(Oneof::new(name));
                    self.expect_token(Token::LBrace)?;
                }
                Token::Enum => {
                    let e = self.parse_enum(&message.path)?;
                    message.add_nested_enum(e);
                }
                Token::Extend => {
                    self.parse_message(&message.path)?;
                }
                Token::Reserved | Token::Extensions => {
                    self.tokenizer.skip_until_token(Token::Semi)?;
                }
                Token::Option => {
                    self.parse_option()?;
                }
                Token::FieldRule(rule) => {
                    let type_name = self.read_identifier()?;
                    let field = match rule {
                        FieldRule::Repeated => {
                            self.parse_message_field(FieldKind::Repeated(value_type(type_name)))?
                        }
                        FieldRule::Optional if self.proto3 => self
                            .parse_message_field(FieldKind::Singular(value_type(type_name)))?
                            .optional(),
                        FieldRule::Optional | FieldRule::Required => {
                            self.parse_message_field(FieldKind::Singular(value_type(type_name)))?
                        }
                    };

                    if field.proto3_optional {
                        let name = format!("_{}", field.name);
                        let mut synthetic = Oneof::new(name.clone());
                        synthetic.add_field_name(field.name.clone());
                        message.add_oneof(synthetic);
                        message.add_field(field.in_oneof(name));
                    } else {
                        message.add_field(field);
                    }
                }
                Token::Map => {
                    self.expect_token(Token::LAngle)?;
                    let key_type = self.read_identifier()?;
                    self.expect_token(Token::Comma)?;
                    let type_name = self.read_identifier()?;
                    self.expect_token(Token::RAngle)?;
                    let field = self.parse_message_field(FieldKind::Map(
                        value_type(key_type),
                        value_type(type_name),
                    ))?;
                    message.add_field(field);
                }
                Token::Identifier(type_name) => {
                    let field =
                        self.parse_message_field(FieldKind::Singular(value_type(type_name)))?;

                    match oneof.as_mut() {
                        Some(oneof) => {
                            oneof.add_field_name(field.name.clone());
                            message.add_field(field.in_oneof(oneof.name.clone()));
                        }
                        None => message.add_field(field),
                    }
                }
                Token::Semi => {
                    // relax extra ";"
                }
                token => return Err(ParseError::UnexpectedMessageToken(token)),
            }
        }

        Ok(message)
    }

    /// Parse a [service] statement
    /// For example:
    ///
    /// ```proto
    /// service SearchService {
    ///  rpc Search(SearchRequest) returns (SearchResponse);
    /// }
    /// ```
    ///
    /// [service] https://developers.google.com/protocol-buffers/docs/proto3#services
    fn parse_service(&mut self) -> Result<Service, ParseError> {
        let mut service = Service::new(self.read_identifier()?);

        self.expect_token(Token::LBrace)?;

        loop {
            match self.tokenizer.next()? {
                Token::RBrace => {
                    break;
                }
                Token::Semi => {
                    // relax extra ;
                }
                Token::Rpc => {
                    let rpc = self.parse_rpc()?;
                    service.add_rpc(rpc)
                }
                Token::Option => {
                    self.parse_option()?;
                }
                found => {
                    return Err(ParseError::UnexpectedToken {
                        found,
                        expected: vec![Token::RBrace, Token::Rpc, Token::Option],
                    })
                }
            }
        }

        Ok(service)
    }

    /// Parse a [rpc] statement
    /// For example:
    ///
    /// ```proto
    /// rpc Search(SearchRequest) returns (SearchResponse);
    /// ```
    ///
    /// [rpc] https://developers.google.com/protocol-buffers/docs/proto3#services
    fn parse_rpc(&mut self) -> Result<Rpc, ParseError> {
        let name = self.read_identifier()?;

        self.expect_token(Token::LParen)?;

        let (request_type, request_stream) = match self.tokenizer.next()? {
            Token::Stream => (self.read_identifier()?, true),
            token => (token.identifier()?, false),
        };

        self.expect_token(Token::RParen)?;
        self.expect_token(Token::Returns)?;
        self.expect_token(Token::LParen)?;

        let (response_type, response_stream) = match self.tokenizer.next()? {
            Token::Stream => (self.read_identifier()?, true),
            token => (token.identifier()?, false),
        };

        self.expect_token(Token::RParen)?;

        match self.tokenizer.next()? {
            Token::Semi => {}
            Token::LBrace => loop {
                match self.tokenizer.next()? {
                    Token::Option => {
                        self.parse_option()?;
                    }
                    Token::Semi => {}
                    Token::RBrace => {
                        break;
                    }
                    found => {
                        return Err(ParseError::UnexpectedToken {
                            found,
                            expected: vec![Token::Option, Token::RBrace],
                        })
                    }
                }
            },
            found => {
                return Err(ParseError::UnexpectedToken {
                    found,
                    expected: vec![Token::Semi, Token::LBrace],
                })
            }
        }

        Ok(Rpc::new(
            name,
            value_type(request_type),
            request_stream,
            value_type(response_type),
            response_stream,
        ))
    }

    /// Parse a [message] field, the type being already read
    /// For example:
    ///
    /// ```proto
    /// string query = 1;
    /// ```
    ///
    /// [message] https://developers.google.com/protocol-buffers/docs/proto3#specifying_field_rules
    fn parse_message_field(&mut self, kind: FieldKind) -> Result<Field, ParseError> {
        let field_name = self.read_identifier()?;
        self.expect_token(Token::Eq)?;

        let field_id = self
            .read_identifier()?
            .parse::<u32>()
            .map_err(ParseError::ParseFieldId)?;

        match self.tokenizer.next()? {
            Token::Semi => {}
            Token::LBrack => {
                self.tokenizer.skip_until_token(Token::Semi)?;
            }
            found => {
                return Err(ParseError::UnexpectedToken {
                    found,
                    expected: vec![Token::Semi, Token::LBrack],
                })
            }
        }

        Ok(Field::new(field_name, field_id, kind))
    }

    /// Parse an [enum]
    /// For example:
    ///
    /// ```proto
    /// enum Status {
    ///   UNKNOWN = 0;
    ///   STARTED = 1;
    ///   RUNNING = 1;
    /// }
    /// ```
    ///
    /// [enum] https://developers.google.com/protocol-buffers/docs/proto3#enum
    fn parse_enum(&mut self, parent: &[String]) -> Result<Enum, ParseError> {
        let mut path = parent.to_vec();
        path.push(self.read_identifier()?);
        let mut e = Enum::new(path);
        self.expect_token(Token::LBrace)?;

        loop {
            match self.tokenizer.next()? {
                Token::RBrace => return Ok(e),
                Token::Option => {
                    self.parse_option()?;
                }
                Token::Reserved => {
                    self.tokenizer.skip_until_token(Token::Semi)?;
                }
                Token::Semi => {}
                Token::EOF => return Err(ParseError::EOF),
                token => {
                    let key = token.identifier()?;
                    self.expect_token(Token::Eq)?;
                    let value = parse_enum_value(&self.read_identifier()?)?;

                    match self.tokenizer.next()? {
                        Token::Semi => {}
                        Token::LBrack => {
                            self.tokenizer.skip_until_token(Token::RBrack)?;
                            self.expect_token(Token::Semi)?;
                        }
                        found => {
                            return Err(ParseError::UnexpectedToken {
                                found,
                                expected: vec![Token::Semi, Token::LBrack],
                            })
                        }
                    }

                    e.insert(key, value);
                }
            }
        }
    }

    /// Read a quoted string or fail with an error
    fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        self.tokenizer.next()?.into_quoted_string()
    }

    /// Read a string identifier or fail with an error
    fn read_identifier(&mut self) -> Result<String, ParseError> {
        self.tokenizer.next()?.identifier()
    }

    /// Read the passed token of fail if the next token does not match the expected one
    fn expect_token(&mut self, expected: Token) -> Result<(), ParseError> {
        let token = self.tokenizer.next()?;
        if token == expected {
            return Ok(());
        }
        Err(ParseError::UnexpectedToken {
            found: token,
            expected: vec![expected],
        })
    }
}

/// Map a declared type name to a scalar, or keep it for later resolution
fn value_type(type_name: String) -> ValueType {
    match Scalar::from_name(&type_name) {
        Some(scalar) => ValueType::Scalar(scalar),
        None => ValueType::Unresolved(type_name),
    }
}

/// Parse a decimal or hexadecimal enum value, optionally negative
fn parse_enum_value(value: &str) -> Result<i32, ParseError> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => digits.parse::<i64>(),
    }
    .map_err(ParseError::ParseEnumValue)?;

    let parsed = if negative { -parsed } else { parsed };
    Ok(parsed as i32)
}

/// Parse the given source into a File
pub fn parse_source(file_name: &str, content: &str) -> Result<File, ParseFileError> {
    FileParser::new(file_name, content.chars()).parse(content)
}

/// Read and parse the file at the given path
pub fn read_file(path: &Path) -> Result<File, ParseFileError> {
    let content = std::fs::read_to_string(path).map_err(|error| ParseFileError::Read {
        file_name: path.to_path_buf(),
        error,
    })?;

    parse_source(&path.to_string_lossy(), &content)
}

#[cfg(test)]
pub mod test_util {
    use crate::{file::File, resolver::resolve_files};

    use super::parse_source;

    /// Parse and resolve a single test file named `test.proto`
    pub fn parse_test_file(content: &str) -> File {
        let file = parse_source("test.proto", content).unwrap_or_else(|err| panic!("{}", err));
        let mut files = vec![file];
        resolve_files(&mut files);
        files.remove(0)
    }
}
