use crate::field::FieldRule;
use crate::iterator_with_position::IteratorWithPosition;
use crate::parse_error::TokenError;
use crate::position::Position;
use crate::token::Token;

/// A tokenizer reads from the `chars` iterator and produce `Token`
pub struct Tokenizer<I: Iterator<Item = char>> {
    /// The chars iterators
    chars: IteratorWithPosition<I>,

    /// Position of the first char of the last token returned
    token_position: Position,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    /// Returns a new Tokenizer for the given char iterator
    pub fn new(chars: I) -> Self {
        Self {
            chars: IteratorWithPosition::new(chars),
            token_position: Position::default(),
        }
    }

    /// Returns the position of the last token read
    pub fn current_position(&self) -> Position {
        self.token_position
    }

    /// Skip tokens until it matches the passed token
    pub fn skip_until_token(&mut self, token: Token) -> Result<(), TokenError> {
        loop {
            match self.next()? {
                t if t == token => return Ok(()),
                Token::EOF => return Ok(()),
                _ => {}
            }
        }
    }

    /// Return the string delimited by the specified char
    fn read_delimited_string(&mut self, end_delimiter: char) -> Result<String, TokenError> {
        let mut value = String::new();
        let mut found_escape_char = false;

        while let Some(char) = self.chars.next() {
            match (char, found_escape_char) {
                ('n', true) => value.push('\n'),
                ('r', true) => value.push('\r'),
                ('t', true) => value.push('\t'),
                ('\\', true) | ('"', true) | ('\'', true) => value.push(char),
                (c, true) => {
                    value.push('\\');
                    value.push(c);
                }
                ('\\', false) => {
                    found_escape_char = true;
                    continue;
                }
                (c, false) if c == end_delimiter => return Ok(value),
                (c, false) => value.push(c),
            }
            found_escape_char = false;
        }

        Err(TokenError::MissingEndDelimiter(end_delimiter))
    }

    /// Return the next identifier starting with given char
    fn read_identifier(&mut self, start: char) -> Token {
        let mut word = String::from(start);

        while let Some(char) = self
            .chars
            .next_if(|c| matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '_' | '-' | '+'))
        {
            word.push(char);
        }

        match word.as_str() {
            "import" => Token::Import,
            "public" => Token::Public,
            "package" => Token::Package,
            "reserved" => Token::Reserved,
            "option" => Token::Option,
            "service" => Token::Service,
            "returns" => Token::Returns,
            "rpc" => Token::Rpc,
            "stream" => Token::Stream,
            "extensions" => Token::Extensions,
            "repeated" => Token::FieldRule(FieldRule::Repeated),
            "optional" => Token::FieldRule(FieldRule::Optional),
            "required" => Token::FieldRule(FieldRule::Required),
            "map" => Token::Map,
            "message" => Token::Message,
            "extend" => Token::Extend,
            "syntax" => Token::Syntax,
            "oneof" => Token::Oneof,
            "enum" => Token::Enum,
            _ => Token::Identifier(word),
        }
    }

    /// Skip a comment, the leading `/` being already consumed
    fn skip_comment(&mut self) -> Result<(), TokenError> {
        match self.chars.next() {
            // /* slash star comment */
            Some('*') => {
                let mut previous_char = ' ';
                for current_char in self.chars.by_ref() {
                    if previous_char == '*' && current_char == '/' {
                        return Ok(());
                    }
                    previous_char = current_char;
                }
                Ok(())
            }

            // // double slash comment
            Some('/') => {
                while self.chars.next_if(|c| *c != '\n').is_some() {}
                Ok(())
            }

            Some(found) => Err(TokenError::UnexpectedChar(found)),
            None => Err(TokenError::UnexpectedChar('/')),
        }
    }

    /// Returns the next token
    pub fn next(&mut self) -> Result<Token, TokenError> {
        loop {
            self.token_position = self.chars.current_position();

            let token = match self.chars.next() {
                None => Token::EOF,

                Some('=') => Token::Eq,
                Some(';') => Token::Semi,
                Some(':') => Token::Colon,
                Some('{') => Token::LBrace,
                Some('}') => Token::RBrace,
                Some('(') => Token::LParen,
                Some(')') => Token::RParen,
                Some('[') => Token::LBrack,
                Some(']') => Token::RBrack,
                Some('<') => Token::LAngle,
                Some('>') => Token::RAngle,
                Some(',') => Token::Comma,

                // whitespaces
                Some(c) if c.is_whitespace() => continue,

                // comment
                Some('/') => {
                    self.skip_comment()?;
                    continue;
                }

                // Quoted string
                Some(c @ '\'') | Some(c @ '"') => Token::String(self.read_delimited_string(c)?),

                // word
                Some(c) => self.read_identifier(c),
            };

            return Ok(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tokenizer::Tokenizer;
    use crate::{field::FieldRule, parse_error::TokenError, token::Token};

    fn tokens(src: &str) -> Result<Vec<Token>, TokenError> {
        let mut tokenizer = Tokenizer::new(src.chars());
        let mut tokens = Vec::new();
        loop {
            match tokenizer.next()? {
                Token::EOF => return Ok(tokens),
                token => tokens.push(token),
            }
        }
    }

    #[test]
    fn it_should_parse_single_quote_string() -> Result<(), TokenError> {
        let mut tokenizer = Tokenizer::new("'hello world'".chars());
        assert_eq!(tokenizer.next()?, Token::String("hello world".to_string()));
        Ok(())
    }

    #[test]
    fn it_should_parse_double_quote_string() -> Result<(), TokenError> {
        let mut tokenizer = Tokenizer::new(r#""hello world""#.chars());
        assert_eq!(tokenizer.next()?, Token::String("hello world".to_string()));
        Ok(())
    }

    #[test]
    fn it_should_parse_escaped_string() -> Result<(), TokenError> {
        let mut tokenizer = Tokenizer::new("'hello \\' \\n world'".chars());
        assert_eq!(
            tokenizer.next()?,
            Token::String("hello ' \n world".to_string())
        );
        Ok(())
    }

    #[test]
    fn it_should_fail_on_unterminated_string() {
        let mut tokenizer = Tokenizer::new("\"hello".chars());
        assert_eq!(tokenizer.next(), Err(TokenError::MissingEndDelimiter('"')));
    }

    #[test]
    fn it_should_skip_comments() -> Result<(), TokenError> {
        assert_eq!(
            tokens("// hello world\nmessage /* inline */ Foo")?,
            vec![Token::Message, Token::Identifier("Foo".into())]
        );
        Ok(())
    }

    #[test]
    fn it_should_tokenize_a_field() -> Result<(), TokenError> {
        assert_eq!(
            tokens("optional int32 count = -1;")?,
            vec![
                Token::FieldRule(FieldRule::Optional),
                Token::Identifier("int32".into()),
                Token::Identifier("count".into()),
                Token::Eq,
                Token::Identifier("-1".into()),
                Token::Semi,
            ]
        );
        Ok(())
    }

    #[test]
    fn it_should_report_the_token_position() -> Result<(), TokenError> {
        let mut tokenizer = Tokenizer::new("package\n  foo;".chars());
        tokenizer.next()?;
        tokenizer.next()?;
        let position = tokenizer.current_position();
        assert_eq!((position.line, position.column), (2, 3));
        Ok(())
    }
}
