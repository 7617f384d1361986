use indexmap::IndexMap;

use crate::UclError;
use crate::ast::{Document, Expr, Value};

/// The constant environment built during the definitions pass and
/// consulted while evaluating value expressions.
pub type Environment = IndexMap<String, Value>;

/// Evaluate a parsed document into its final value tree.
///
/// Two strictly ordered passes: first every `(def ...)` in document
/// order, each evaluated against the constants declared before it, then
/// the root value expression against the complete environment. A fresh
/// environment is built per call; nothing persists between calls.
///
/// # Errors
/// `EvalError` on a duplicate constant declaration (at the second
/// declaration's position) or a reference to an unknown constant (at the
/// reference's position).
pub fn evaluate(document: &Document) -> Result<Value, UclError> {
    let mut env = Environment::new();

    for def in &document.defs {
        if env.contains_key(&def.name) {
            return Err(UclError::EvalError {
                message: format!("Константа уже объявлена: {}", def.name),
                line: def.line,
                column: def.column,
            });
        }
        let resolved = eval_expr(&def.value, &env)?;
        env.insert(def.name.clone(), resolved);
    }

    eval_expr(&document.root, &env)
}

fn eval_expr(expr: &Expr, env: &Environment) -> Result<Value, UclError> {
    match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::String(s) => Ok(Value::String(s.clone())),
        Expr::Ref(r) => env.get(&r.name).cloned().ok_or_else(|| UclError::EvalError {
            message: format!("Неизвестная константа: {}", r.name),
            line: r.line,
            column: r.column,
        }),
        Expr::Mapping(entries) => {
            // key uniqueness is already guaranteed by the parser
            let mut out = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                out.insert(key.clone(), eval_expr(value, env)?);
            }
            Ok(Value::Mapping(out))
        }
    }
}
