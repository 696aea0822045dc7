use crate::token::{lookup_ident, Position, Token, TokenKind};

/// Streaming lexer over UTF-8 source text.
///
/// Call [`Lexer::next_token`] repeatedly; after the input is exhausted it
/// returns `EOF` tokens forever. Anything the lexer does not recognise
/// becomes an `ILLEGAL` token carrying the offending code point, so the
/// caller decides how fatal that is.
pub struct Lexer {
    input: String,
    /// Byte offset of the current code point.
    position: usize,
    /// Byte offset of the next code point.
    read_position: usize,
    ch: Option<char>,

    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer {
            input: input.to_string(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        match self.input[self.read_position..].chars().next() {
            None => {
                // Treat end of input as a position one past the last byte,
                // so literals running up to EOF keep their final code point.
                self.position = self.input.len();
                self.ch = None;
            }
            Some(c) => {
                self.position = self.read_position;
                self.read_position += c.len_utf8();
                if c == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }
                self.ch = Some(c);
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.read_position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while self.ch.map_or(false, |c| c.is_whitespace()) {
            self.read_char();
        }
    }

    /// Produces the next token. The recorded position is that of the
    /// token's first code point.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let pos = Position {
            line: self.line,
            column: self.column,
            offset: self.position,
        };

        let tok = match self.ch {
            None => return Token::new(TokenKind::Eof, "", pos),
            Some('=') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==", pos)
                } else {
                    Token::new(TokenKind::Assign, "=", pos)
                }
            }
            Some('!') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=", pos)
                } else {
                    Token::new(TokenKind::Bang, "!", pos)
                }
            }
            Some('<') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::LtEq, "<=", pos)
                } else {
                    Token::new(TokenKind::Lt, "<", pos)
                }
            }
            Some('>') => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::GtEq, ">=", pos)
                } else {
                    Token::new(TokenKind::Gt, ">", pos)
                }
            }
            Some('+') => Token::new(TokenKind::Plus, "+", pos),
            Some('-') => Token::new(TokenKind::Minus, "-", pos),
            Some('*') => Token::new(TokenKind::Asterisk, "*", pos),
            Some('/') => Token::new(TokenKind::Slash, "/", pos),
            Some(',') => Token::new(TokenKind::Comma, ",", pos),
            Some(';') => Token::new(TokenKind::Semicolon, ";", pos),
            Some('(') => Token::new(TokenKind::Lparen, "(", pos),
            Some(')') => Token::new(TokenKind::Rparen, ")", pos),
            Some('{') => Token::new(TokenKind::Lbrace, "{", pos),
            Some('}') => Token::new(TokenKind::Rbrace, "}", pos),
            Some(c) if is_letter(c) => {
                let literal = self.read_identifier();
                let kind = lookup_ident(&literal);
                return Token { kind, literal, pos };
            }
            Some(c) if c.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal, pos);
            }
            Some(c) => Token::new(TokenKind::Illegal, c.to_string(), pos),
        };

        self.read_char();
        tok
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while self.ch.map_or(false, |c| is_letter(c) || c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.map_or(false, |c| c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[start..self.position].to_string()
    }
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
