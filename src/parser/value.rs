use super::*;
use crate::ast::{Expr, Ref};

pub(super) fn parse_value(parser: &mut Parser) -> Result<Expr, UclError> {
    match &parser.peek().kind {
        TokenKind::Number(_) => {
            let token = parser.bump()?;
            if let TokenKind::Number(n) = token.kind {
                Ok(Expr::Number(n))
            } else {
                unreachable!()
            }
        }
        TokenKind::String(_) => {
            let token = parser.bump()?;
            if let TokenKind::String(s) = token.kind {
                Ok(Expr::String(s))
            } else {
                unreachable!()
            }
        }
        TokenKind::LBrace => parse_ref(parser),
        TokenKind::DollarBracket => parse_mapping(parser),
        _ => Err(parser.unexpected()),
    }
}

fn parse_ref(parser: &mut Parser) -> Result<Expr, UclError> {
    parser.expect(&TokenKind::LBrace)?;
    let (name, line, column) = expect_name(parser)?;
    parser.expect(&TokenKind::RBrace)?;

    Ok(Expr::Ref(Ref { name, line, column }))
}

/// `"$[" ( pair ("," pair)* ","? )? "]"` with pair `NAME ":" value`.
/// Key uniqueness is checked here, immediately upon seeing the duplicate.
fn parse_mapping(parser: &mut Parser) -> Result<Expr, UclError> {
    parser.expect(&TokenKind::DollarBracket)?;

    let mut entries: Vec<(String, Expr)> = Vec::new();
    if parser.peek().kind != TokenKind::RBracket {
        loop {
            let (key, line, column) = expect_name(parser)?;
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(UclError::SyntaxError {
                    message: format!("Повтор ключа в словаре: {}", key),
                    line,
                    column,
                });
            }
            parser.expect(&TokenKind::Colon)?;
            let value = parse_value(parser)?;
            entries.push((key, value));

            if parser.peek().kind == TokenKind::Comma {
                parser.bump()?;
                if parser.peek().kind == TokenKind::RBracket {
                    break; // trailing comma
                }
            } else {
                break;
            }
        }
    }
    parser.expect(&TokenKind::RBracket)?;

    Ok(Expr::Mapping(entries))
}

/// Consume a NAME token, returning its text and 1-based start position.
pub(super) fn expect_name(parser: &mut Parser) -> Result<(String, usize, usize), UclError> {
    if !matches!(parser.peek().kind, TokenKind::Name(_)) {
        return Err(parser.unexpected());
    }
    let token = parser.bump()?;
    if let TokenKind::Name(name) = token.kind {
        Ok((name, token.line, token.column))
    } else {
        unreachable!()
    }
}
