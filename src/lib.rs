pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod export;
pub mod lexer;
pub mod parser;

pub use ast::{Def, Document, Expr, Ref, Value};
pub use config::UclConfig;
pub use error::UclError;
pub use eval::evaluate;
pub use parser::parse;
