use crate::{position::Position, token::Token};
use std::{io, num::ParseIntError, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("Invalid end delimiter {0}")]
    MissingEndDelimiter(char),

    #[error("Unexpected char {0}")]
    UnexpectedChar(char),
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of file")]
    EOF,

    #[error("proto version {0} not supported")]
    ProtoSyntaxNotSupported(String),

    #[error("package already set")]
    PackageAlreadySet,

    #[error("unexpected top-level token: {0}")]
    UnexpectedTopLevelToken(Token),

    #[error("unexpected message token: {0}")]
    UnexpectedMessageToken(Token),

    #[error("unexpected string: {0}")]
    UnexpectedString(Token),

    #[error("unexpected token: \"{found}\" expected one of {expected:?}")]
    UnexpectedToken { found: Token, expected: Vec<Token> },

    #[error("failed to parse field id: {0}")]
    ParseFieldId(ParseIntError),

    #[error("failed to parse enum value: {0}")]
    ParseEnumValue(ParseIntError),

    #[error("{0}")]
    TokenError(#[from] TokenError),
}

#[derive(Error, Debug)]
pub enum ParseFileError {
    #[error("Failed to read file {file_name}. {error}")]
    Read {
        file_name: PathBuf,
        error: io::Error,
    },

    #[error("{0}")]
    ParseError(String),
}

impl ParseFileError {
    /// Build a parse error showing the lines preceding the error position and a caret under the failing column
    pub fn from_parse_error(
        error: ParseError,
        file_name: &str,
        content: &str,
        position: Position,
    ) -> ParseFileError {
        let line_number = position.line;
        let line_number_width = line_number.to_string().len();
        let show_lines = std::cmp::min(position.line, 3);

        let lines = content
            .split('\n')
            .skip(position.line - show_lines)
            .take(show_lines)
            .enumerate()
            .map(|(i, v)| {
                format!(
                    "{:line$} | {}",
                    line_number - (show_lines - i - 1),
                    v,
                    line = line_number_width
                )
            })
            .collect::<Vec<String>>()
            .join("\n");

        let padding = " ".repeat(position.column + line_number_width + 2);

        ParseFileError::ParseError(format!(
            "Failed to parse {}\n{}\n{}^ {}",
            file_name, lines, padding, error
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseError, ParseFileError};
    use crate::position::Position;

    #[test]
    fn it_should_point_at_the_failing_column() {
        let content = "syntax = \"proto3\";\npackage pb;\nmessage {";
        let position = Position {
            line: 3,
            column: 9,
            offset: 0,
        };

        let err = ParseFileError::from_parse_error(ParseError::EOF, "test.proto", content, position);
        let expected = [
            "Failed to parse test.proto",
            "1 | syntax = \"proto3\";",
            "2 | package pb;",
            "3 | message {",
            "            ^ unexpected end of file",
        ]
        .join("\n");

        assert_eq!(err.to_string(), expected);
    }
}
