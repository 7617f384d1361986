use super::value::{expect_name, parse_value};
use super::*;
use crate::ast::Def;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, UclError> {
    let mut defs = Vec::new();
    while parser.peek().kind == TokenKind::LParen {
        defs.push(parse_def(parser)?);
    }

    let root = parse_value(parser)?;

    // a complete document consumes the whole input
    if parser.peek().kind != TokenKind::Eof {
        return Err(parser.unexpected());
    }

    Ok(Document { defs, root })
}

fn parse_def(parser: &mut Parser) -> Result<Def, UclError> {
    parser.expect(&TokenKind::LParen)?;
    parser.expect(&TokenKind::Def)?;
    let (name, line, column) = expect_name(parser)?;
    let value = parse_value(parser)?;
    parser.expect(&TokenKind::RParen)?;

    Ok(Def {
        name,
        value,
        line,
        column,
    })
}
