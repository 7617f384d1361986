use std::str::Chars;

use crate::UclError;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // --- literals ---
    Name(String),
    Number(f64),
    String(String),

    // --- structure ---
    LParen,
    RParen,
    DollarBracket, // "$["
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,

    // --- keywords ---
    Def,

    Eof,
}

/// A token with its raw source text and 1-based start position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 1,
        };
        lexer.peek = lexer.input.next();
        lexer
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn next_token(&mut self) -> Result<Token, UclError> {
        tokenizer::next_token(self)
    }
}
