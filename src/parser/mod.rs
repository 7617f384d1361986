use crate::UclError;
use crate::ast::Document;
use crate::lexer::{Lexer, Token, TokenKind};

mod document;
mod value;

/// Parse a complete UCL document: zero or more `(def name value)`
/// statements followed by exactly one root value expression.
///
/// # Examples
/// ```
/// use ucl_cfg::parse;
///
/// let doc = parse("(def pi 3.14159e+0) $[ x: {pi}, ]")?;
/// assert_eq!(doc.defs.len(), 1);
/// # Ok::<(), ucl_cfg::UclError>(())
/// ```
///
/// # Errors
/// Returns a `SyntaxError` anchored at the offending token's start for any
/// malformed input, including trailing content after a complete document.
pub fn parse(input: &str) -> Result<Document, UclError> {
    let mut parser = Parser::new(input)?;
    document::parse_document(&mut parser)
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Token,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, UclError> {
        let mut lexer = Lexer::new(input);
        let peek = lexer.next_token()?;
        Ok(Self { lexer, peek })
    }

    pub(crate) fn bump(&mut self) -> Result<Token, UclError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.peek, next))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.peek
    }

    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<Token, UclError> {
        if &self.peek.kind == expected {
            self.bump()
        } else {
            Err(self.unexpected())
        }
    }

    /// Generic syntax error anchored at the lookahead token's start.
    pub(crate) fn unexpected(&self) -> UclError {
        UclError::SyntaxError {
            message: "Синтаксическая ошибка".into(),
            line: self.peek.line,
            column: self.peek.column,
        }
    }
}
