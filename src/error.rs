use std::fmt;

/// The main error type for UCL lexing, parsing and evaluation.
///
/// `SyntaxError` and `EvalError` carry a 1-based source position so a
/// caller can reformat or localize them; their `Display` form is the
/// base diagnostic template (see [`crate::diagnostics::render`] for the
/// caret-annotated form).
#[derive(Debug, Clone, PartialEq)]
pub enum UclError {
    /// Malformed token stream, unexpected end of input, trailing content
    /// after a complete document, or a duplicate key in a mapping literal.
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
    },
    /// Duplicate constant declaration or reference to an undeclared name.
    EvalError {
        message: String,
        line: usize,
        column: usize,
    },
    /// A typed-access conversion failed (wrong value kind, out of range).
    TypeError {
        message: String,
    },
    /// A dot-path lookup did not match any key in the evaluated tree.
    MissingKey {
        path: String,
    },
    /// Raised when a configuration file cannot be read.
    FileError {
        message: String,
        path: String,
    },
}

impl UclError {
    /// Source position for errors that carry one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            UclError::SyntaxError { line, column, .. }
            | UclError::EvalError { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl fmt::Display for UclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UclError::SyntaxError { message, line, column }
            | UclError::EvalError { message, line, column } =>
                write!(f, "{} (строка {}, столбец {})", message, line, column),
            UclError::TypeError { message } =>
                write!(f, "Ошибка типа: {}", message),
            UclError::MissingKey { path } =>
                write!(f, "Ключ не найден: {}", path),
            UclError::FileError { message, path } =>
                write!(f, "Ошибка чтения файла {}: {}", path, message),
        }
    }
}

impl std::error::Error for UclError {}
