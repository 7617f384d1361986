use super::scanner::{bump, skip_whitespace};
use super::*;

fn syntax_error(line: usize, column: usize) -> UclError {
    UclError::SyntaxError {
        message: "Синтаксическая ошибка".into(),
        line,
        column,
    }
}

fn single(lexer: &mut Lexer, kind: TokenKind, raw: &str, line: usize, column: usize) -> Token {
    bump(lexer);
    Token {
        kind,
        raw: raw.to_string(),
        line,
        column,
    }
}

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, UclError> {
    skip_whitespace(lexer);

    // token start, before anything is consumed
    let line = lexer.line;
    let column = lexer.column;

    match lexer.peek {
        None => Ok(Token {
            kind: TokenKind::Eof,
            raw: String::new(),
            line,
            column,
        }),
        Some('(') => Ok(single(lexer, TokenKind::LParen, "(", line, column)),
        Some(')') => Ok(single(lexer, TokenKind::RParen, ")", line, column)),
        Some(']') => Ok(single(lexer, TokenKind::RBracket, "]", line, column)),
        Some('{') => Ok(single(lexer, TokenKind::LBrace, "{", line, column)),
        Some('}') => Ok(single(lexer, TokenKind::RBrace, "}", line, column)),
        Some(':') => Ok(single(lexer, TokenKind::Colon, ":", line, column)),
        Some(',') => Ok(single(lexer, TokenKind::Comma, ",", line, column)),

        // "$" is only valid as the start of the "$[" mapping opener
        Some('$') => {
            bump(lexer);
            if lexer.peek == Some('[') {
                bump(lexer);
                Ok(Token {
                    kind: TokenKind::DollarBracket,
                    raw: "$[".to_string(),
                    line,
                    column,
                })
            } else {
                Err(syntax_error(line, column))
            }
        }

        Some('"') => read_string(lexer, line, column),

        Some(c) if c == '+' || c == '-' || c.is_ascii_digit() => read_number(lexer, line, column),

        Some(c) if c.is_ascii_lowercase() => Ok(read_name(lexer, line, column)),

        Some(_) => Err(syntax_error(line, column)),
    }
}

/// Names are exactly `[a-z]+`. The spelling `def` is always the keyword,
/// so it cannot be used as a constant name or mapping key.
fn read_name(lexer: &mut Lexer, line: usize, column: usize) -> Token {
    let mut name = String::new();
    while let Some(c) = lexer.peek {
        if c.is_ascii_lowercase() {
            name.push(c);
            bump(lexer);
        } else {
            break;
        }
    }

    let kind = match name.as_str() {
        "def" => TokenKind::Def,
        _ => TokenKind::Name(name.clone()),
    };
    Token {
        kind,
        raw: name,
        line,
        column,
    }
}

/// Signed decimal literal with a mandatory exponent marker:
/// `[+-]? digits ('.' digits?)? (e|E) [+-]? digits`. A number without an
/// exponent is a syntax error at the literal's start.
fn read_number(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token, UclError> {
    let mut raw = String::new();

    if matches!(lexer.peek, Some('+') | Some('-')) {
        if let Some(sign) = bump(lexer) {
            raw.push(sign);
        }
    }

    if !read_digits(lexer, &mut raw) {
        return Err(syntax_error(line, column));
    }

    if lexer.peek == Some('.') {
        raw.push('.');
        bump(lexer);
        read_digits(lexer, &mut raw); // fraction digits are optional
    }

    match lexer.peek {
        Some(c @ ('e' | 'E')) => {
            raw.push(c);
            bump(lexer);
        }
        _ => return Err(syntax_error(line, column)),
    }

    if matches!(lexer.peek, Some('+') | Some('-')) {
        if let Some(sign) = bump(lexer) {
            raw.push(sign);
        }
    }

    if !read_digits(lexer, &mut raw) {
        return Err(syntax_error(line, column));
    }

    let value = raw
        .parse::<f64>()
        .map_err(|_| syntax_error(line, column))?;
    Ok(Token {
        kind: TokenKind::Number(value),
        raw,
        line,
        column,
    })
}

fn read_digits(lexer: &mut Lexer, raw: &mut String) -> bool {
    let mut seen = false;
    while let Some(c) = lexer.peek {
        if c.is_ascii_digit() {
            raw.push(c);
            bump(lexer);
            seen = true;
        } else {
            break;
        }
    }
    seen
}

/// Double-quoted string. `\n`, `\t`, `\"` and `\\` decode to their
/// conventional meanings; any other backslash sequence is a syntax error
/// at the backslash. An unterminated string reports the opening quote.
fn read_string(lexer: &mut Lexer, line: usize, column: usize) -> Result<Token, UclError> {
    let mut raw = String::from('"');
    bump(lexer); // opening quote

    let mut content = String::new();
    loop {
        let esc_line = lexer.line;
        let esc_column = lexer.column;
        match bump(lexer) {
            None => return Err(syntax_error(line, column)),
            Some('"') => {
                raw.push('"');
                break;
            }
            Some('\\') => {
                raw.push('\\');
                match bump(lexer) {
                    Some('n') => {
                        raw.push('n');
                        content.push('\n');
                    }
                    Some('t') => {
                        raw.push('t');
                        content.push('\t');
                    }
                    Some('"') => {
                        raw.push('"');
                        content.push('"');
                    }
                    Some('\\') => {
                        raw.push('\\');
                        content.push('\\');
                    }
                    _ => return Err(syntax_error(esc_line, esc_column)),
                }
            }
            Some(c) => {
                raw.push(c);
                content.push(c);
            }
        }
    }

    Ok(Token {
        kind: TokenKind::String(content),
        raw,
        line,
        column,
    })
}
