use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Identifier,

    // Literals
    Number,
    Str,
    /// Same semantic role as `Number`; kept distinct so the scanner can
    /// report what it saw.
    Float,

    // Keywords
    Null,
    Let,
    Const,
    Func,
    If,
    Else,
    While,
    Return,
    Struct,

    // Assignment
    Assign,

    // Comparisons
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    /// `+ - * / %`, distinguished by lexeme.
    BinaryOperator,

    // Logical operators
    And,
    Or,
    Not,

    // Punctuation
    Semicolon,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Dot,

    // End-of-input sentinel
    Eof,
}

/// Immutable token owning its lexeme.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
        }
    }
}

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf::phf_map! {
    "null" => TokenKind::Null,
    "let" => TokenKind::Let,
    "const" => TokenKind::Const,
    "func" => TokenKind::Func,
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "while" => TokenKind::While,
    "return" => TokenKind::Return,
    "struct" => TokenKind::Struct,
};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unrecognized character found in source: {0:?}")]
    UnrecognizedCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("number literal contains more than one decimal point")]
    MalformedNumber,
}

/// Single-pass scanner producing an eager token sequence terminated by
/// [`TokenKind::Eof`]. The first lexical violation aborts the whole scan.
pub struct Lexer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self { input, iter }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some((idx, ch)) = self.iter.next() {
            match ch {
                ' ' | '\t' | '\n' => continue,
                '#' => self.skip_comment(),
                '0'..='9' => tokens.push(self.read_number(idx)?),
                c if Self::is_name_start(c) => tokens.push(self.read_identifier(idx)),
                '"' => tokens.push(self.read_string(idx)?),
                '(' => tokens.push(Token::new("(", TokenKind::OpenParen)),
                ')' => tokens.push(Token::new(")", TokenKind::CloseParen)),
                '{' => tokens.push(Token::new("{", TokenKind::OpenBrace)),
                '}' => tokens.push(Token::new("}", TokenKind::CloseBrace)),
                '[' => tokens.push(Token::new("[", TokenKind::OpenBracket)),
                ']' => tokens.push(Token::new("]", TokenKind::CloseBracket)),
                ',' => tokens.push(Token::new(",", TokenKind::Comma)),
                '.' => tokens.push(Token::new(".", TokenKind::Dot)),
                ';' => tokens.push(Token::new(";", TokenKind::Semicolon)),
                // A `-` glued to a digit is part of the number literal, not
                // an operator.
                '-' => {
                    if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                        tokens.push(self.read_number(idx)?);
                    } else {
                        tokens.push(Token::new("-", TokenKind::BinaryOperator));
                    }
                }
                '+' | '*' | '/' | '%' => {
                    tokens.push(Token::new(ch.to_string(), TokenKind::BinaryOperator));
                }
                '&' => {
                    if self.iter.next_if(|(_, c)| *c == '&').is_some() {
                        tokens.push(Token::new("&&", TokenKind::And));
                    } else {
                        return Err(LexError::UnrecognizedCharacter('&'));
                    }
                }
                '|' => {
                    if self.iter.next_if(|(_, c)| *c == '|').is_some() {
                        tokens.push(Token::new("||", TokenKind::Or));
                    } else {
                        return Err(LexError::UnrecognizedCharacter('|'));
                    }
                }
                '=' => tokens.push(self.one_or_two('=', "==", TokenKind::EqualEqual, "=", TokenKind::Assign)),
                '!' => tokens.push(self.one_or_two('=', "!=", TokenKind::NotEqual, "!", TokenKind::Not)),
                '<' => tokens.push(self.one_or_two('=', "<=", TokenKind::LessEqual, "<", TokenKind::Less)),
                '>' => tokens.push(self.one_or_two('=', ">=", TokenKind::GreaterEqual, ">", TokenKind::Greater)),
                _ => return Err(LexError::UnrecognizedCharacter(ch)),
            }
        }

        tokens.push(Token::new("EndOfFile", TokenKind::Eof));
        Ok(tokens)
    }

    fn is_name_start(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn peek_char(&mut self) -> Option<char> {
        self.iter.peek().map(|(_, ch)| *ch)
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }

    fn skip_comment(&mut self) {
        while self.iter.next_if(|(_, ch)| *ch != '\n').is_some() {}
    }

    /// Consumes digits plus at most one `.`; starts at `start`, which may
    /// point at a leading `-`.
    fn read_number(&mut self, start: usize) -> Result<Token, LexError> {
        let mut dots = 0;
        while let Some((_, ch)) = self
            .iter
            .next_if(|(_, ch)| ch.is_ascii_digit() || *ch == '.')
        {
            if ch == '.' {
                dots += 1;
                if dots > 1 {
                    return Err(LexError::MalformedNumber);
                }
            }
        }

        let end = self.next_idx();
        let lexeme = &self.input[start..end];
        let kind = if dots == 0 {
            TokenKind::Number
        } else {
            TokenKind::Float
        };
        Ok(Token::new(lexeme, kind))
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self
            .iter
            .next_if(|(_, ch)| ch.is_ascii_alphanumeric() || *ch == '_')
            .is_some()
        {}

        let end = self.next_idx();
        let word = &self.input[start..end];
        match KEYWORDS.get(word) {
            Some(kind) => Token::new(word, *kind),
            None => Token::new(word, TokenKind::Identifier),
        }
    }

    /// The lexeme is the string contents without the surrounding quotes.
    fn read_string(&mut self, open: usize) -> Result<Token, LexError> {
        loop {
            match self.iter.next() {
                Some((idx, '"')) => {
                    return Ok(Token::new(&self.input[open + 1..idx], TokenKind::Str));
                }
                Some(_) => {}
                None => return Err(LexError::UnterminatedString),
            }
        }
    }

    fn one_or_two(
        &mut self,
        second: char,
        two_lexeme: &str,
        two_kind: TokenKind,
        one_lexeme: &str,
        one_kind: TokenKind,
    ) -> Token {
        if self.iter.next_if(|(_, ch)| *ch == second).is_some() {
            Token::new(two_lexeme, two_kind)
        } else {
            Token::new(one_lexeme, one_kind)
        }
    }
}
